use anyhow::Result;
use async_trait::async_trait;
use avg_infras::config::number_service_config::NumberServiceConfig;
use avg_infras::external::mock_numbers::sample_numbers;
use avg_infras::external::{FetchError, NumberServiceClient};
use avg_types::NumberType;
use std::sync::Arc;
use tracing::{error, info, warn};

/// 一次外部调用拿到的原始数字批次，可能包含重复值或窗口中已有的值
/// raw batch from one upstream call, duplicates allowed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchResult {
    pub numbers: Vec<i64>,
}

impl FetchResult {
    pub fn new(numbers: Vec<i64>) -> Self {
        Self { numbers }
    }

    /// 外部服务失败时的替代值：没有新数字
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

impl From<Vec<i64>> for FetchResult {
    fn from(numbers: Vec<i64>) -> Self {
        Self::new(numbers)
    }
}

/// 按数字类型拉取一批数字，任何失败都降级为空批次，不向上抛错
#[async_trait]
pub trait NumberFetcher: Send + Sync {
    async fn fetch(&self, number_type: NumberType) -> FetchResult;
}

pub struct HttpNumberFetcher {
    client: NumberServiceClient,
}

impl HttpNumberFetcher {
    pub fn new(client: NumberServiceClient) -> Self {
        Self { client }
    }

    pub async fn try_fetch(&self, number_type: NumberType) -> Result<FetchResult, FetchError> {
        self.client.fetch_numbers(number_type).await.map(FetchResult::new)
    }
}

#[async_trait]
impl NumberFetcher for HttpNumberFetcher {
    async fn fetch(&self, number_type: NumberType) -> FetchResult {
        match self.try_fetch(number_type).await {
            Ok(result) => result,
            Err(err @ FetchError::Timeout(_)) => {
                warn!("Number service too slow for {}: {}", number_type, err);
                FetchResult::empty()
            }
            Err(err) => {
                let url = self.client.endpoint_url(number_type);
                error!("Number service failed for {} ({}): {}", number_type, url, err);
                FetchResult::empty()
            }
        }
    }
}

/// 开发模式：不访问网络，直接从本地样本池取数
pub struct MockNumberFetcher;

#[async_trait]
impl NumberFetcher for MockNumberFetcher {
    async fn fetch(&self, number_type: NumberType) -> FetchResult {
        info!("Using test data for {}", number_type);
        FetchResult::new(sample_numbers(number_type))
    }
}

pub fn build_fetcher(config: &NumberServiceConfig) -> Result<Arc<dyn NumberFetcher>> {
    if config.use_mock_data {
        warn!("Number service mock mode enabled, no upstream calls will be made");
        return Ok(Arc::new(MockNumberFetcher));
    }
    let client = NumberServiceClient::new(config.clone())?;
    Ok(Arc::new(HttpNumberFetcher::new(client)))
}


#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_config() -> NumberServiceConfig {
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        NumberServiceConfig { base_url: format!("http://{}", addr), timeout_ms: 200, ..NumberServiceConfig::default() }
    }

    #[tokio::test]
    async fn test_http_fetcher_falls_back_to_empty() {
        let fetcher = HttpNumberFetcher::new(NumberServiceClient::new(unreachable_config()).unwrap());

        assert!(fetcher.try_fetch(NumberType::Prime).await.is_err());
        assert_eq!(fetcher.fetch(NumberType::Prime).await, FetchResult::empty());
    }

    #[tokio::test]
    async fn test_build_fetcher_mock_mode() {
        let config = NumberServiceConfig { use_mock_data: true, ..NumberServiceConfig::default() };
        let fetcher = build_fetcher(&config).unwrap();

        let batch = fetcher.fetch(NumberType::Even).await;
        assert!(!batch.is_empty());
        assert!(batch.numbers.iter().all(|n| n % 2 == 0));
    }

    #[tokio::test]
    async fn test_build_fetcher_http_mode_degrades() {
        let fetcher = build_fetcher(&unreachable_config()).unwrap();
        assert!(fetcher.fetch(NumberType::Random).await.is_empty());
    }
}
