use anyhow::{Context, Result};
use avg_common_utils::env::{get_env, get_env_flag};
use avg_infras::config::ConfigError;
use avg_infras::config::number_service_config::NumberServiceConfig;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::info;

const CONFIG_FILE_NAME: &str = "avg-calculator.toml";
const MAX_AVG_PRECISION: u32 = 10;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerDetails,
    pub window: WindowDetails,
    pub number_service: NumberServiceConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerDetails {
    pub bind_address: String,
}

impl Default for ServerDetails {
    fn default() -> Self {
        Self { bind_address: "0.0.0.0:9876".to_string() }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowDetails {
    /// 每种数字类型窗口的最大长度
    pub capacity: usize,
    /// 平均值保留的小数位
    pub avg_precision: u32,
}

impl Default for WindowDetails {
    fn default() -> Self {
        Self { capacity: 10, avg_precision: 2 }
    }
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let cfg = toml::from_str(content)?;
        Ok(cfg)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_toml_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// 环境变量优先于配置文件
    pub fn apply_overrides(&mut self, auth_token: Option<String>, use_mock_data: Option<bool>) {
        if let Some(token) = auth_token {
            self.number_service.auth_token = Some(token);
        }
        if let Some(flag) = use_mock_data {
            self.number_service.use_mock_data = flag;
        }
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(get_env("NUMBER_SERVICE_TOKEN"), get_env_flag("NUMBER_SERVICE_USE_MOCK"));
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.capacity == 0 {
            return Err(ConfigError::invalid("window.capacity", "must be at least 1"));
        }
        if self.window.avg_precision > MAX_AVG_PRECISION {
            return Err(ConfigError::invalid(
                "window.avg_precision",
                format!("must be at most {MAX_AVG_PRECISION}"),
            ));
        }
        if self.server.bind_address.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::invalid(
                "server.bind_address",
                format!("not a socket address: {}", self.server.bind_address),
            ));
        }
        self.number_service.validate()
    }

    pub fn bind_address(&self) -> Result<SocketAddr> {
        self.server
            .bind_address
            .parse()
            .with_context(|| format!("Invalid bind address: {}", self.server.bind_address))
    }
}

/// 配置文件路径：环境变量 AVG_CALC_CONFIG > 当前工作目录 > crate 根目录
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(path) = get_env("AVG_CALC_CONFIG") {
        return Some(PathBuf::from(path));
    }

    let cwd_path = std::env::current_dir().map(|p| p.join(CONFIG_FILE_NAME)).ok();
    if let Some(path) = cwd_path.filter(|p| p.exists()) {
        return Some(path);
    }

    let manifest_path = Path::new(env!("CARGO_MANIFEST_DIR")).join(CONFIG_FILE_NAME);
    manifest_path.exists().then_some(manifest_path)
}

/// 加载配置；找不到配置文件时使用默认值
pub fn load_app_config() -> Result<AppConfig> {
    let mut cfg = match resolve_config_path() {
        Some(path) => {
            info!("Loading config from: {}", path.display());
            AppConfig::load_from_file(&path)?
        }
        None => {
            info!("No config file found, using defaults");
            AppConfig::default()
        }
    };
    cfg.apply_env_overrides();
    cfg.validate()?;
    Ok(cfg)
}
