//! Metrics recording implementation using Prometheus.

use prometheus::{
    Encoder, IntCounter, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
    register_int_counter_vec_with_registry, register_int_counter_with_registry,
    register_int_gauge_with_registry,
};
use std::sync::Arc;

use crate::error::DemoError;
use crate::models::Device;

/// Content type of the Prometheus text exposition format.
pub const TEXT_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Trait for recording the demo's metrics.
pub trait MetricsRecorder: Clone + Send + Sync + 'static {
    /// Counts one button-click visit.
    fn record_visit(&self);

    /// Counts one classified request for `device`.
    fn record_device_request(&self, device: Device);

    /// Publishes the current simulated replica count.
    fn set_replicas(&self, replicas: u8);

    /// Zeroes the visit counter and drops every device series.
    fn reset_counters(&self);
}

/// Prometheus metrics collector.
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,

    visits_total: IntCounter,
    replicas: IntGauge,
    device_requests_total: IntCounterVec,
}

impl Metrics {
    /// Creates a new metrics instance with its own Prometheus registry.
    ///
    /// On Linux the registry also carries the default `process_*` collector.
    pub fn new() -> Self {
        let registry = Arc::new(Registry::new());

        let visits_total = register_int_counter_with_registry!(
            Opts::new("demo_visits_total", "Total number of visits (button clicks)."),
            registry.clone()
        )
        .expect("Failed to register demo_visits_total");

        let replicas = register_int_gauge_with_registry!(
            Opts::new("demo_replicas", "Number of app replicas (simulated)."),
            registry.clone()
        )
        .expect("Failed to register demo_replicas");

        let device_requests_total = register_int_counter_vec_with_registry!(
            Opts::new(
                "demo_device_requests_total",
                "Requests grouped by detected device type."
            ),
            &["device"],
            registry.clone()
        )
        .expect("Failed to register demo_device_requests_total");

        #[cfg(target_os = "linux")]
        registry
            .register(Box::new(
                prometheus::process_collector::ProcessCollector::for_self(),
            ))
            .expect("Failed to register process collector");

        Metrics {
            registry,
            visits_total,
            replicas,
            device_requests_total,
        }
    }

    /// Renders all metrics in Prometheus text format.
    pub fn render(&self) -> Result<String, DemoError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRecorder for Metrics {
    fn record_visit(&self) {
        self.visits_total.inc();
    }

    fn record_device_request(&self, device: Device) {
        self.device_requests_total
            .with_label_values(&[device.as_str()])
            .inc();
    }

    fn set_replicas(&self, replicas: u8) {
        self.replicas.set(i64::from(replicas));
    }

    fn reset_counters(&self) {
        self.visits_total.reset();
        self.device_requests_total.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_value(text: &str, prefix: &str) -> Option<String> {
        text.lines()
            .find(|line| line.starts_with(prefix))
            .and_then(|line| line.rsplit(' ').next())
            .map(str::to_string)
    }

    #[test]
    fn renders_demo_series() {
        let metrics = Metrics::new();
        metrics.record_visit();
        metrics.record_visit();
        metrics.set_replicas(2);
        metrics.record_device_request(Device::Android);

        let text = metrics.render().expect("render should succeed");
        assert_eq!(line_value(&text, "demo_visits_total ").as_deref(), Some("2"));
        assert_eq!(line_value(&text, "demo_replicas ").as_deref(), Some("2"));
        assert_eq!(
            line_value(&text, "demo_device_requests_total{device=\"android\"}").as_deref(),
            Some("1")
        );
        assert!(text.contains("# TYPE demo_visits_total counter"));
        assert!(text.contains("# TYPE demo_replicas gauge"));
    }

    #[test]
    fn reset_clears_counters_but_not_gauge() {
        let metrics = Metrics::new();
        metrics.record_visit();
        metrics.set_replicas(3);
        metrics.record_device_request(Device::Windows);

        metrics.reset_counters();
        metrics.set_replicas(1);

        let text = metrics.render().expect("render should succeed");
        assert_eq!(line_value(&text, "demo_visits_total ").as_deref(), Some("0"));
        assert_eq!(line_value(&text, "demo_replicas ").as_deref(), Some("1"));
        assert!(!text.contains("device=\"windows\""));
    }

    #[test]
    fn instances_do_not_share_state() {
        let a = Metrics::new();
        let b = Metrics::new();
        a.record_visit();

        let text = b.render().expect("render should succeed");
        assert_eq!(line_value(&text, "demo_visits_total ").as_deref(), Some("0"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn includes_process_metrics() {
        let text = Metrics::new().render().expect("render should succeed");
        assert!(text.contains("process_"));
    }
}
