//! Health check endpoints.

use crate::state::AppState;
use axum::{Router, response::IntoResponse, routing::get};

/// Registers health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/healthz", get(health_check))
}

/// Liveness probe. Never touches the counters.
async fn health_check() -> impl IntoResponse {
    "ok"
}
