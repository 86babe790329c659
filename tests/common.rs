#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use sre_demo::config::AppConfig;
use sre_demo::error::DemoError;
use sre_demo::notify::Notifier;
use sre_demo::routes::create_router;
use sre_demo::state::AppState;

pub const IPHONE_UA: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
pub const LINUX_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/128.0";

/// Notifier double that records every publish and can be told to fail.
#[derive(Default)]
pub struct RecordingNotifier {
    calls: AtomicUsize,
    subjects: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        RecordingNotifier {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn subjects(&self) -> Vec<String> {
        self.subjects.lock().expect("subjects lock").clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn get_name(&self) -> &str {
        "recording"
    }

    async fn publish(&self, subject: &str, _message: &str) -> Result<(), DemoError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.subjects
            .lock()
            .expect("subjects lock")
            .push(subject.to_string());
        if self.fail {
            Err(DemoError::Notify("simulated outage".to_string()))
        } else {
            Ok(())
        }
    }
}

pub fn build_app(config: AppConfig, notifier: Option<Arc<RecordingNotifier>>) -> (Router, AppState) {
    let notifier = notifier.map(|n| n as Arc<dyn Notifier>);
    let state = AppState::new(Arc::new(config), notifier);
    (create_router(state.clone()), state)
}

pub fn request(method: Method, path: &str, user_agent: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(ua) = user_agent {
        builder = builder.header("User-Agent", ua);
    }
    builder.body(Body::empty()).expect("failed to build request")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("body is not UTF-8")
}

/// Value of the first sample line starting with `prefix`.
pub fn sample(metrics_text: &str, prefix: &str) -> Option<String> {
    metrics_text
        .lines()
        .find(|line| line.starts_with(prefix))
        .and_then(|line| line.rsplit(' ').next())
        .map(str::to_string)
}
