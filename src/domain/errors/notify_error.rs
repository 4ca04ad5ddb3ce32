//! Webhook notification error types.

use thiserror::Error;

/// Webhook delivery error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum NotifyError {
    #[error("network error posting to webhook: {message}")]
    Network { message: String },

    #[error("webhook returned HTTP {code}")]
    Status { code: u16 },
}

impl NotifyError {
    /// Creates a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }
}
