use super::AppState;
use crate::server::response::handle_rejection;
use crate::server::routes::handlers::number_handlers::get_numbers;
use std::convert::Infallible;
use warp::{self, Filter};

pub mod handlers;

pub fn routes(state: AppState) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
    let api = warp::path("api");

    let ping = api.and(warp::path("ping")).and(warp::path::end()).and(warp::get()).map(handlers::ping);
    let version = api.and(warp::path("version")).and(warp::path::end()).and(warp::get()).map(handlers::version);

    //=====================numbers================================
    let numbers = warp::path!("numbers" / String)
        .and(warp::get())
        .and(with_state(state))
        .and_then(get_numbers);
    //=====================numbers================================

    warp::path::end()
        .and(warp::get())
        .map(handlers::index)
        .or(numbers)
        .or(ping)
        .or(version)
        .recover(handle_rejection)
}

fn with_state(state: AppState) -> impl Filter<Extract = (AppState,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::WindowResponse;
    use crate::domain::service::NumberWindowService;
    use crate::domain::window_store::WindowStore;
    use crate::fetcher::test_support::ScriptedFetcher;
    use avg_types::NumberType;
    use serde_json::Value;
    use std::sync::Arc;

    fn state_with(fetcher: ScriptedFetcher) -> (AppState, Arc<ScriptedFetcher>) {
        let fetcher = Arc::new(fetcher);
        let service = NumberWindowService::new(fetcher.clone(), Arc::new(WindowStore::new(10)), 2);
        (AppState::new(Arc::new(service)), fetcher)
    }

    #[tokio::test]
    async fn test_index_health_check() {
        let (state, _) = state_with(ScriptedFetcher::default());
        let filter = routes(state);

        let resp = warp::test::request().method("GET").path("/").reply(&filter).await;
        assert_eq!(resp.status(), 200);
        let body: Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(body["status"], "OK");
        assert_eq!(body["message"], "Average Calculator API is running");
    }

    #[tokio::test]
    async fn test_get_numbers_updates_window() {
        let fetcher = ScriptedFetcher::default()
            .with(NumberType::Even, vec![2, 4])
            .with(NumberType::Even, vec![4, 6, 8]);
        let (state, _) = state_with(fetcher);
        let filter = routes(state);

        let first = warp::test::request().path("/numbers/e").reply(&filter).await;
        assert_eq!(first.status(), 200);

        let resp = warp::test::request().path("/numbers/e").reply(&filter).await;
        assert_eq!(resp.status(), 200);
        let body: WindowResponse = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(
            body,
            WindowResponse {
                window_prev_state: vec![2, 4],
                window_curr_state: vec![2, 4, 6, 8],
                numbers: vec![6, 8],
                avg: 5.0,
            }
        );
    }

    #[tokio::test]
    async fn test_get_numbers_with_no_upstream_data_is_ok() {
        let (state, _) = state_with(ScriptedFetcher::default());
        let filter = routes(state);

        let resp = warp::test::request().path("/numbers/p").reply(&filter).await;
        assert_eq!(resp.status(), 200);
        let body: Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "windowPrevState": [], "windowCurrState": [], "numbers": [], "avg": 0.0 })
        );
    }

    #[tokio::test]
    async fn test_unknown_number_type_is_client_error() {
        let fetcher = ScriptedFetcher::default().with(NumberType::Even, vec![2, 4]);
        let (state, fetcher) = state_with(fetcher);
        let filter = routes(state.clone());

        let resp = warp::test::request().path("/numbers/x").reply(&filter).await;
        assert_eq!(resp.status(), 400);
        let body: Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(body["code"], 400);
        assert_eq!(body["message"], "unrecognized number type: x");

        // 没有调用外部服务，所有窗口保持不变
        assert_eq!(fetcher.remaining(NumberType::Even), 1);
        for number_type in NumberType::ALL {
            assert!(state.service().store().snapshot(number_type).is_empty());
        }
    }

    #[tokio::test]
    async fn test_unknown_route_and_method() {
        let (state, _) = state_with(ScriptedFetcher::default());
        let filter = routes(state);

        let resp = warp::test::request().path("/nothing/here").reply(&filter).await;
        assert_eq!(resp.status(), 404);

        let resp = warp::test::request().method("POST").path("/numbers/e").reply(&filter).await;
        assert_eq!(resp.status(), 405);
    }

    #[tokio::test]
    async fn test_aux_routes() {
        let (state, _) = state_with(ScriptedFetcher::default());
        let filter = routes(state);

        let resp = warp::test::request().path("/api/ping").reply(&filter).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.body(), "ping pong!");

        let resp = warp::test::request().path("/api/version").reply(&filter).await;
        assert_eq!(resp.status(), 200);
        assert!(std::str::from_utf8(resp.body()).unwrap().starts_with("avg-calculator version"));
    }
}
