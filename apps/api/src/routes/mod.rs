pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::export::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_input_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/submissions", post(handlers::handle_submit))
        .route(
            "/api/v1/submissions/download/:filename",
            post(handlers::handle_download),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
