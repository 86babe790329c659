//! Visit alert delivery.

pub mod base;
pub mod sns;

pub use base::{Notifier, VisitAlert, create_notifier, publish_best_effort};
pub use sns::SnsNotifier;
