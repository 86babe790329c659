//! Library exports for sre-demo, shared between the binary and tests.

pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod notify;
pub mod routes;
pub mod startup;
pub mod state;
pub mod utils;
