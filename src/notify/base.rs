use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{error, info};

use super::sns::SnsNotifier;
use crate::config::AppConfig;
use crate::error::DemoError;

/// A sink that can deliver a one-off alert message.
#[async_trait]
pub trait Notifier: Send + Sync {
    fn get_name(&self) -> &str;
    async fn publish(&self, subject: &str, message: &str) -> Result<(), DemoError>;
}

/// The alert sent when the visit counter reaches its threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitAlert {
    pub subject: String,
    pub message: String,
}

impl VisitAlert {
    pub fn for_threshold(threshold: u64) -> Self {
        VisitAlert {
            subject: format!("SRE Demo ALERT: Visits hit {}", threshold),
            message: format!(
                "The visit counter reached {}. System under load (demo).",
                threshold
            ),
        }
    }
}

/// Builds the SNS notifier when a topic is configured, otherwise `None`.
pub async fn create_notifier(config: &AppConfig) -> Option<Arc<dyn Notifier>> {
    let Some(topic_arn) = config.sns_topic_arn.as_deref().filter(|arn| !arn.is_empty()) else {
        info!("SNS_TOPIC_ARN not set. Visit alerts are disabled.");
        return None;
    };

    let notifier = SnsNotifier::from_config(
        topic_arn,
        &config.aws_region,
        config.sns_endpoint_url.as_deref(),
    )
    .await;
    info!(
        "Visit alerts enabled for topic '{}' in region '{}'",
        topic_arn, config.aws_region
    );
    Some(Arc::new(notifier))
}

/// Publishes `alert`, bounded by `timeout`. Failures are logged and never returned.
///
/// Returns whether the notifier acknowledged the message.
pub async fn publish_best_effort(
    notifier: &dyn Notifier,
    alert: &VisitAlert,
    timeout: Duration,
) -> bool {
    let outcome = match tokio::time::timeout(
        timeout,
        notifier.publish(&alert.subject, &alert.message),
    )
    .await
    {
        Ok(result) => result,
        Err(_) => Err(DemoError::NotifyTimeout(timeout.as_millis() as u64)),
    };

    match outcome {
        Ok(()) => {
            info!(
                event_name = "notify.alert.published",
                event_domain = "notify",
                notifier = notifier.get_name(),
                subject = alert.subject.as_str(),
                "visit alert published"
            );
            true
        }
        Err(e) => {
            error!(
                event_name = "notify.alert.failed",
                event_domain = "notify",
                notifier = notifier.get_name(),
                error = %e,
                "visit alert publish failed"
            );
            false
        }
    }
}
