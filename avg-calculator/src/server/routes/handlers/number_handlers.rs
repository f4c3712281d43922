use crate::server::AppState;
use crate::server::routes::handlers::handle_error;
use tracing::info;
use warp::{Rejection, Reply};

// http://localhost:9876/numbers/e
pub async fn get_numbers(numberid: String, state: AppState) -> Result<impl Reply, Rejection> {
    info!("Got request for {}", numberid);
    let response = state.service().refresh_by_id(&numberid).await.map_err(handle_error)?;
    Ok(warp::reply::json(&response))
}
