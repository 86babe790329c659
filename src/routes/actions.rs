//! Dashboard action handlers: visit, scale and reset.
//!
//! Every action answers with a 302 back to the dashboard.

use std::time::Duration;

use axum::{Router, extract::State, response::Response, routing::post};
use tracing::info;

use crate::config::FeaturesConfig;
use crate::notify::{VisitAlert, publish_best_effort};
use crate::state::AppState;
use crate::utils::http_helpers::redirect_home;

/// Registers the action routes. `/reset` is mounted only when enabled.
pub fn routes(features: &FeaturesConfig) -> Router<AppState> {
    let router = Router::new()
        .route("/visit", post(record_visit))
        .route("/scale", post(scale_up));

    if features.reset_enabled {
        router.route("/reset", post(reset))
    } else {
        router
    }
}

/// Counts a visit and fires the alert on the exact threshold crossing.
///
/// The alert is awaited before redirecting, bounded by `notify.timeout_in_ms`.
async fn record_visit(State(state): State<AppState>) -> Response {
    let visits = state.counters.record_visit(&state.metrics);
    info!(
        event_name = "demo.visit.recorded",
        event_domain = "demo",
        visits,
        "visit recorded"
    );

    let notify = &state.config.notify;
    if visits == notify.threshold {
        if let Some(notifier) = &state.notifier {
            let alert = VisitAlert::for_threshold(notify.threshold);
            let timeout = Duration::from_millis(notify.timeout_in_ms);
            publish_best_effort(notifier.as_ref(), &alert, timeout).await;
        }
    }

    redirect_home()
}

async fn scale_up(State(state): State<AppState>) -> Response {
    let replicas = state.counters.scale_up(&state.metrics);
    info!(
        event_name = "demo.replicas.scaled",
        event_domain = "demo",
        replicas,
        "replicas scaled"
    );

    redirect_home()
}

async fn reset(State(state): State<AppState>) -> Response {
    let snapshot = state.counters.reset(&state.metrics);
    info!(
        event_name = "demo.counters.reset",
        event_domain = "demo",
        replicas = snapshot.replicas,
        "counters reset"
    );

    redirect_home()
}
