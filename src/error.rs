//! Error types shared across the server.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("failed to encode metrics: {0}")]
    MetricsEncode(#[from] prometheus::Error),

    #[error("metrics encoding produced invalid UTF-8: {0}")]
    MetricsUtf8(#[from] std::string::FromUtf8Error),

    #[error("failed to publish notification: {0}")]
    Notify(String),

    #[error("notification publish timed out after {0} ms")]
    NotifyTimeout(u64),

    #[error("invalid logging configuration: {0}")]
    Logging(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
