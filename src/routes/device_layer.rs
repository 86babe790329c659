//! Device classification middleware.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use super::metrics::METRICS_PATH;
use crate::models::Device;
use crate::state::AppState;

/// Tallies the caller's device for every request except metrics scrapes.
///
/// A missing or non-UTF-8 `User-Agent` counts as `other`.
pub async fn classify_device(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if request.uri().path() != METRICS_PATH {
        let user_agent = request
            .headers()
            .get(header::USER_AGENT)
            .and_then(|value| value.to_str().ok());
        let device = Device::classify(user_agent);

        let seen = state.counters.record_device(device, &state.metrics);
        debug!(
            event_name = "http.device.classified",
            event_domain = "http",
            device = device.as_str(),
            path = request.uri().path(),
            seen,
            "request classified"
        );
    }

    next.run(request).await
}
