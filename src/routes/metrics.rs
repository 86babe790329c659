//! Metrics exposition endpoint.

use crate::metrics::TEXT_CONTENT_TYPE;
use crate::state::AppState;
use crate::utils::http_helpers::HTTPError;
use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};

/// Path served by this module; the device classifier skips it.
pub const METRICS_PATH: &str = "/metrics";

/// Creates the metrics route.
pub fn routes() -> Router<AppState> {
    Router::new().route(METRICS_PATH, get(metrics_handler))
}

/// Handler for the /metrics endpoint.
///
/// Returns all collected metrics in Prometheus text format, or a 500 if
/// encoding fails.
async fn metrics_handler(State(state): State<AppState>) -> Result<impl IntoResponse, HTTPError> {
    let metrics_text = state.metrics.render()?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)],
        metrics_text,
    ))
}
