use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::health;
use super::index;
use super::middleware::{logging_middleware, metrics_middleware};
use super::predict;
use super::state::AppState;
use crate::infrastructure::observability::create_metrics_router;

/// Largest accepted `POST /predict` body, in bytes
pub const DEFAULT_BODY_LIMIT: usize = 16 * 1024 * 1024;

/// Create the full router with application state and the default body limit.
pub fn create_router(state: AppState) -> Router {
    create_router_with_body_limit(state, DEFAULT_BODY_LIMIT)
}

/// Create the full router with application state.
///
/// A `/predict` body over `body_limit` bytes is rejected with 413. With metrics
/// enabled every route except the scrape endpoint itself is counted and timed.
pub fn create_router_with_body_limit(state: AppState, body_limit: usize) -> Router {
    let metrics = state.metrics.clone();

    let mut router = Router::new()
        .route("/", get(index::index))
        .route(
            "/predict",
            post(predict::predict).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware));

    if let Some(metrics) = metrics {
        router = router
            .layer(middleware::from_fn_with_state(
                metrics.clone(),
                metrics_middleware,
            ))
            .merge(create_metrics_router(metrics));
    }

    router.layer(TraceLayer::new_for_http())
}
