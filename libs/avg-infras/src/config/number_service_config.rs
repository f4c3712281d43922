use crate::config::ConfigError;
use crate::external::number_service::constant;
use avg_types::NumberType;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 每种数字类型在外部服务上的路径
/// per-type endpoint path under the number service base url
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EndpointPaths {
    pub prime: String,
    pub fibonacci: String,
    pub even: String,
    pub random: String,
}

impl Default for EndpointPaths {
    fn default() -> Self {
        Self {
            prime: constant::PRIMES.to_string(),
            fibonacci: constant::FIBONACCI.to_string(),
            even: constant::EVEN.to_string(),
            random: constant::RANDOM.to_string(),
        }
    }
}

impl EndpointPaths {
    pub fn path_for(&self, number_type: NumberType) -> &str {
        match number_type {
            NumberType::Prime => &self.prime,
            NumberType::Fibonacci => &self.fibonacci,
            NumberType::Even => &self.even,
            NumberType::Random => &self.random,
        }
    }
}

/// 外部数字生成服务配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NumberServiceConfig {
    pub base_url: String,
    /// 单次请求超时（毫秒）
    pub timeout_ms: u64,
    /// 开发模式：不访问网络，使用本地样本数据
    pub use_mock_data: bool,
    pub auth_token: Option<String>,
    pub paths: EndpointPaths,
}

impl Default for NumberServiceConfig {
    fn default() -> Self {
        Self {
            base_url: constant::BASE_URL.to_string(),
            timeout_ms: constant::DEFAULT_TIMEOUT_MS,
            use_mock_data: false,
            auth_token: None,
            paths: EndpointPaths::default(),
        }
    }
}

impl NumberServiceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn endpoint_url(&self, number_type: NumberType) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.paths.path_for(number_type).trim_start_matches('/')
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::invalid("number_service.timeout_ms", "must be greater than 0"));
        }
        // mock 模式下不访问网络，base_url 可以为空
        if self.use_mock_data {
            return Ok(());
        }
        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::invalid("number_service.base_url", "must not be empty"));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::invalid(
                "number_service.base_url",
                format!("unsupported scheme in {base_url}"),
            ));
        }
        Ok(())
    }
}
