pub mod counters;
pub mod device;

pub use counters::{CounterSnapshot, DemoCounters, MAX_REPLICAS, MIN_REPLICAS};
pub use device::Device;
