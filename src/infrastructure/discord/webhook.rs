//! Discord webhook HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::dto::WebhookPayload;
use crate::domain::errors::NotifyError;
use crate::domain::ports::WebhookPort;

/// Discord webhook client posting screenshot announcements.
pub struct DiscordWebhook {
    client: Client,
    webhook_url: String,
    username: String,
}

impl DiscordWebhook {
    /// Creates a new webhook client.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(
        webhook_url: impl Into<String>,
        username: impl Into<String>,
    ) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| NotifyError::network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            webhook_url: webhook_url.into(),
            username: username.into(),
        })
    }
}

#[async_trait]
impl WebhookPort for DiscordWebhook {
    async fn notify(
        &self,
        target_name: &str,
        server_label: &str,
        requester_name: &str,
        image_url: &str,
    ) -> Result<(), NotifyError> {
        let payload = WebhookPayload::screenshot(
            target_name,
            server_label,
            requester_name,
            image_url,
            &self.username,
        );

        debug!(target = %target_name, "Posting screenshot link to Discord");

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach Discord webhook");
                if e.is_timeout() {
                    NotifyError::network("request timed out")
                } else if e.is_connect() {
                    NotifyError::network("failed to connect to Discord")
                } else {
                    NotifyError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            debug!(code = status.as_u16(), "Sent webhook message successfully");
            Ok(())
        } else {
            warn!(code = status.as_u16(), "Discord webhook rejected the message");
            Err(NotifyError::Status {
                code: status.as_u16(),
            })
        }
    }
}
