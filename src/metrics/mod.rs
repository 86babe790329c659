//! Metrics collection and exposition for Prometheus.
//!
//! This module provides the demo's counters and gauge behind a single recorder.

mod recorder;

pub use recorder::{Metrics, MetricsRecorder, TEXT_CONTENT_TYPE};
