use axum::routing::any;
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(handlers::invoke))
        .route("/{*path}", any(handlers::invoke))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
