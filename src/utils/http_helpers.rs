use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::DemoError;

/// A general purpose HTTP error type that can be converted into an `IntoResponse`.
#[derive(Debug)]
pub struct HTTPError {
    status: StatusCode,
    message: String,
}

impl HTTPError {
    /// Creates a new HTTP error with the given status code and message.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        HTTPError {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

/// Converts our `HTTPError` into an HTTP response.
impl IntoResponse for HTTPError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Internal failures are reported as a generic 500; the detail goes to the log.
impl From<DemoError> for HTTPError {
    fn from(e: DemoError) -> Self {
        tracing::error!(
            event_name = "http.internal_error",
            event_domain = "http",
            error = %e,
            "request failed"
        );
        HTTPError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

/// 302 Found pointing back at the dashboard.
pub fn redirect_home() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}
