use crate::domain::window::WindowUpdate;
use avg_types::ParseNumberTypeError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    InvalidNumberType(#[from] ParseNumberTypeError),
}

/// `/numbers/{numberid}` 的响应体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowResponse {
    pub window_prev_state: Vec<i64>,
    pub window_curr_state: Vec<i64>,
    pub numbers: Vec<i64>,
    pub avg: f64,
}

impl WindowResponse {
    pub fn from_update(update: WindowUpdate, avg: f64) -> Self {
        Self {
            window_prev_state: update.prev,
            window_curr_state: update.curr,
            numbers: update.admitted,
            avg,
        }
    }
}
