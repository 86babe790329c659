use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use super::device::Device;
use crate::metrics::MetricsRecorder;

/// Lowest simulated replica count, also the value after a reset.
pub const MIN_REPLICAS: u8 = 1;
/// Scaling saturates here.
pub const MAX_REPLICAS: u8 = 3;

#[derive(Debug)]
struct CounterState {
    visits: u64,
    replicas: u8,
    devices: BTreeMap<Device, u64>,
}

impl Default for CounterState {
    fn default() -> Self {
        CounterState {
            visits: 0,
            replicas: MIN_REPLICAS,
            devices: BTreeMap::new(),
        }
    }
}

/// Point-in-time copy of the demo counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub visits: u64,
    pub replicas: u8,
    pub devices: BTreeMap<Device, u64>,
}

impl CounterSnapshot {
    /// Tally for a single device, zero if never seen.
    pub fn device_count(&self, device: Device) -> u64 {
        self.devices.get(&device).copied().unwrap_or(0)
    }
}

/// Visit, replica and device counters for the running process.
///
/// Every mutation is a single critical section that also updates the
/// matching Prometheus series, so the dashboard and `/metrics` never
/// disagree and replicas stay within [`MIN_REPLICAS`, `MAX_REPLICAS`].
#[derive(Debug, Default)]
pub struct DemoCounters {
    inner: Mutex<CounterState>,
}

impl DemoCounters {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave the plain integers
    // half-updated, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, CounterState> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Adds one visit and returns the new total.
    pub fn record_visit(&self, metrics: &impl MetricsRecorder) -> u64 {
        let mut state = self.lock();
        state.visits += 1;
        metrics.record_visit();
        state.visits
    }

    /// Adds one replica, saturating at [`MAX_REPLICAS`], and returns the new count.
    pub fn scale_up(&self, metrics: &impl MetricsRecorder) -> u8 {
        let mut state = self.lock();
        state.replicas = (state.replicas + 1).min(MAX_REPLICAS);
        metrics.set_replicas(state.replicas);
        state.replicas
    }

    pub fn record_device(&self, device: Device, metrics: &impl MetricsRecorder) -> u64 {
        let mut state = self.lock();
        let count = state.devices.entry(device).or_insert(0);
        *count += 1;
        metrics.record_device_request(device);
        *count
    }

    /// Zeroes visits, clears device tallies and drops replicas back to the minimum.
    pub fn reset(&self, metrics: &impl MetricsRecorder) -> CounterSnapshot {
        let mut state = self.lock();
        *state = CounterState::default();
        metrics.reset_counters();
        metrics.set_replicas(state.replicas);
        Self::snapshot_of(&state)
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        Self::snapshot_of(&self.lock())
    }

    fn snapshot_of(state: &CounterState) -> CounterSnapshot {
        CounterSnapshot {
            visits: state.visits,
            replicas: state.replicas,
            devices: state.devices.clone(),
        }
    }
}
