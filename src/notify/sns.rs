use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_sns::error::DisplayErrorContext;
use aws_sdk_sns::Client;
use tracing::{debug, info};

use super::Notifier;
use crate::error::DemoError;

/// Publishes alerts to an AWS SNS topic.
pub struct SnsNotifier {
    client: Client,
    topic_arn: String,
}

impl SnsNotifier {
    /// Builds a client from the ambient AWS environment (credentials chain,
    /// profile) pinned to `region`, optionally against a custom endpoint.
    pub async fn from_config(topic_arn: &str, region: &str, endpoint_url: Option<&str>) -> Self {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region.to_string()));
        if let Some(url) = endpoint_url {
            info!("Using custom SNS endpoint '{}'", url);
            loader = loader.endpoint_url(url);
        }
        let sdk_config = loader.load().await;
        Self::with_client(Client::new(&sdk_config), topic_arn)
    }

    pub fn with_client(client: Client, topic_arn: impl Into<String>) -> Self {
        SnsNotifier {
            client,
            topic_arn: topic_arn.into(),
        }
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    fn get_name(&self) -> &str {
        "sns"
    }

    async fn publish(&self, subject: &str, message: &str) -> Result<(), DemoError> {
        debug!("Publishing to SNS topic '{}'", self.topic_arn);
        let output = self
            .client
            .publish()
            .topic_arn(&self.topic_arn)
            .subject(subject)
            .message(message)
            .send()
            .await
            .map_err(|e| DemoError::Notify(DisplayErrorContext(&e).to_string()))?;

        debug!(
            message_id = output.message_id().unwrap_or_default(),
            "SNS accepted message"
        );
        Ok(())
    }
}
