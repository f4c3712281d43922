mod response;
mod routes;

use crate::config::load_app_config;
use crate::domain::service::NumberWindowService;
use anyhow::Result;
use avg_common_utils::tracing_utils::setup_tracing;
use std::sync::Arc;
use tracing::info;
use warp::Filter;

const APPLICATION_NAME: &str = "avg-calculator";

#[derive(Clone)]
pub struct AppState {
    service: Arc<NumberWindowService>,
}

impl AppState {
    pub fn new(service: Arc<NumberWindowService>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &Arc<NumberWindowService> {
        &self.service
    }
}

pub async fn start() -> Result<()> {
    // 初始化 tracing 日志系统
    setup_tracing();

    info!("Starting avg-calculator server...");

    let config = load_app_config()?;
    let bind_address = config.bind_address()?;

    // init app
    let service = NumberWindowService::from_config(&config)?;
    let app_state = AppState::new(Arc::new(service));

    let routes = routes::routes(app_state).with(warp::log(APPLICATION_NAME));

    info!("You can access the server at {}", bind_address);
    warp::serve(routes).run(bind_address).await;

    Ok(())
}
