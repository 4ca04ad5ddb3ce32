//! Game console error types.

use thiserror::Error;

/// RCON console error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ConsoleError {
    #[error("io error talking to server: {0}")]
    Io(#[from] std::io::Error),

    #[error("server did not answer within {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("unexpected server response: {message}")]
    Protocol { message: String },
}

impl ConsoleError {
    /// Creates a protocol error.
    #[must_use]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }
}
