use crate::config::AppConfig;
use crate::domain::model::{AppResult, WindowResponse};
use crate::domain::window_store::WindowStore;
use crate::fetcher::{NumberFetcher, build_fetcher};
use anyhow::Result;
use avg_common_utils::num_utils::mean_rounded;
use avg_types::NumberType;
use std::sync::Arc;
use tracing::{info, warn};

/// 拉取 → 合并窗口 → 计算平均值
pub struct NumberWindowService {
    fetcher: Arc<dyn NumberFetcher>,
    store: Arc<WindowStore>,
    avg_precision: u32,
}

impl NumberWindowService {
    pub fn new(fetcher: Arc<dyn NumberFetcher>, store: Arc<WindowStore>, avg_precision: u32) -> Self {
        Self { fetcher, store, avg_precision }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let fetcher = build_fetcher(&config.number_service)?;
        let store = Arc::new(WindowStore::new(config.window.capacity));
        Ok(Self::new(fetcher, store, config.window.avg_precision))
    }

    pub fn store(&self) -> &Arc<WindowStore> {
        &self.store
    }

    pub async fn refresh(&self, number_type: NumberType) -> WindowResponse {
        // 拉取在锁外进行，不同请求可以并发访问外部服务
        let batch = self.fetcher.fetch(number_type).await;
        if batch.is_empty() {
            warn!("No data for {}, keeping current window", number_type);
        }

        let update = self.store.update(number_type, &batch);
        let avg = mean_rounded(&update.curr, self.avg_precision);
        info!(
            "Window update for {}: prev={:?}, curr={:?}, added={:?}, avg={}",
            number_type, update.prev, update.curr, update.admitted, avg
        );
        WindowResponse::from_update(update, avg)
    }

    pub async fn refresh_by_id(&self, numberid: &str) -> AppResult<WindowResponse> {
        let number_type: NumberType = numberid.parse()?;
        Ok(self.refresh(number_type).await)
    }
}
