//! Webhook port definition.

use async_trait::async_trait;

use crate::domain::errors::NotifyError;

/// Port for posting a screenshot link to the chat webhook.
#[async_trait]
pub trait WebhookPort: Send + Sync {
    /// Posts a message embedding `image_url`, crediting the requester.
    async fn notify(
        &self,
        target_name: &str,
        server_label: &str,
        requester_name: &str,
        image_url: &str,
    ) -> Result<(), NotifyError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    /// Mock webhook recording every notification.
    pub struct MockWebhook {
        pub notifications: Arc<Mutex<Vec<(String, String)>>>,
        should_succeed: AtomicBool,
    }

    impl MockWebhook {
        pub fn new(should_succeed: bool) -> Self {
            Self {
                notifications: Arc::new(Mutex::new(Vec::new())),
                should_succeed: AtomicBool::new(should_succeed),
            }
        }

        pub fn notify_count(&self) -> usize {
            self.notifications.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl WebhookPort for MockWebhook {
        async fn notify(
            &self,
            target_name: &str,
            _server_label: &str,
            _requester_name: &str,
            image_url: &str,
        ) -> Result<(), NotifyError> {
            self.notifications
                .lock()
                .unwrap()
                .push((target_name.to_string(), image_url.to_string()));
            if self.should_succeed.load(Ordering::SeqCst) {
                Ok(())
            } else {
                Err(NotifyError::Status { code: 500 })
            }
        }
    }
}
