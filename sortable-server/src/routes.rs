use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{AppState, handlers};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::people::people_table))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
