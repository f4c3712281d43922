use serde::Serialize;
use std::convert::Infallible;
use warp::http::StatusCode;
use warp::{Rejection, Reply};

// 错误响应结构体
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { code: status.as_u16(), message: message.into() }
    }
}

impl warp::reject::Reject for ErrorResponse {}

/// 把所有 rejection 转成 JSON 错误响应
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let error_response = if let Some(e) = err.find::<ErrorResponse>() {
        ErrorResponse { code: e.code, message: e.message.clone() }
    } else if err.is_not_found() {
        ErrorResponse::new(StatusCode::NOT_FOUND, "Not found")
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        ErrorResponse::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    } else {
        ErrorResponse::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
    };

    let status = StatusCode::from_u16(error_response.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    Ok(warp::reply::with_status(warp::reply::json(&error_response), status))
}
