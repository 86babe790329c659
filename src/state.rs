//! Shared application state.
//!
//! Contains the state that is shared across all request handlers:
//! configuration, the demo counters, metrics and the optional alert sink.

use crate::config::AppConfig;
use crate::metrics::{Metrics, MetricsRecorder};
use crate::models::DemoCounters;
use crate::notify::Notifier;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// This state is cloned for each request handler; the counters and
/// metrics live behind shared handles so every clone sees the same values.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup.
    pub config: Arc<AppConfig>,
    /// Visit, replica and device counters.
    pub counters: Arc<DemoCounters>,
    /// Prometheus registry exposed on `/metrics`.
    pub metrics: Metrics,
    /// Alert sink, present only when a topic is configured.
    pub notifier: Option<Arc<dyn Notifier>>,
}

impl AppState {
    /// Creates fresh counters and publishes the initial replica count.
    pub fn new(config: Arc<AppConfig>, notifier: Option<Arc<dyn Notifier>>) -> Self {
        let counters = Arc::new(DemoCounters::new());
        let metrics = Metrics::new();
        metrics.set_replicas(counters.snapshot().replicas);

        AppState {
            config,
            counters,
            metrics,
            notifier,
        }
    }
}
