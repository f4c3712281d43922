use crate::domain::model::AppError;
use crate::server::response::ErrorResponse;
use serde::Serialize;
use warp::Rejection;
use warp::http::StatusCode;

pub mod number_handlers;

#[derive(Serialize)]
struct HealthResponse {
    message: &'static str,
    status: &'static str,
}

pub fn index() -> warp::reply::Json {
    warp::reply::json(&HealthResponse { message: "Average Calculator API is running", status: "OK" })
}

pub fn ping() -> &'static str {
    "ping pong!"
}

pub fn version() -> String {
    format!("{} version {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

fn handle_error(e: AppError) -> Rejection {
    let error_response = match e {
        AppError::InvalidNumberType(ref err) => ErrorResponse::new(StatusCode::BAD_REQUEST, err.to_string()),
    };

    // 返回自定义的 Rejection 错误
    warp::reject::custom(error_response)
}
