use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "info";

/// 初始化全局 tracing 订阅者，可重复调用（测试中常见）
/// install the global fmt subscriber; later calls are no-ops
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}
