use crate::config::number_service_config::NumberServiceConfig;
use crate::external::number_service::payload::parse_numbers;
use avg_types::NumberType;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

pub(crate) mod constant;
mod payload;

/// 外部数字服务调用失败的原因
/// why a call to the number service failed
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed payload: {0}")]
    Decode(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("failed to build http client: {0}")]
    ClientBuild(String),
}

impl FetchError {
    fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(timeout)
        } else if err.is_connect() {
            FetchError::Connect(err.to_string())
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Request(err.to_string())
        }
    }
}

/// 外部数字生成服务客户端，每种数字类型一个 endpoint
#[derive(Debug, Clone)]
pub struct NumberServiceClient {
    client: reqwest::Client,
    config: NumberServiceConfig,
}

impl NumberServiceClient {
    pub fn new(config: NumberServiceConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| FetchError::ClientBuild(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn endpoint_url(&self, number_type: NumberType) -> String {
        self.config.endpoint_url(number_type)
    }

    /// 拉取一批数字；超时、连接失败、非 2xx、报文格式错误都会返回 Err
    pub async fn fetch_numbers(&self, number_type: NumberType) -> Result<Vec<i64>, FetchError> {
        let url = self.endpoint_url(number_type);
        let timeout = self.config.timeout();
        debug!("Calling number service: {}", url);

        let mut request = self.client.get(&url);
        if let Some(token) = &self.config.auth_token {
            request = request.bearer_auth(token);
        }

        let started = Instant::now();
        let response = request.send().await.map_err(|e| FetchError::from_reqwest(e, timeout))?;
        let status = response.status();
        info!("Got response from {}: HTTP {} in {:?}", url, status, started.elapsed());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status: status.as_u16(), body });
        }

        let body = response.bytes().await.map_err(|e| FetchError::from_reqwest(e, timeout))?;
        let numbers = parse_numbers(&body)?;
        debug!("Got {} numbers for {}: {:?}", numbers.len(), number_type, numbers);
        Ok(numbers)
    }
}
