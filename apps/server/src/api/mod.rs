//! HTTP API routers.

mod contributions;
mod goals;
mod health;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Builds the full application router under `/api`.
pub fn app_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(goals::router())
        .merge(contributions::router())
        .merge(health::router());

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
