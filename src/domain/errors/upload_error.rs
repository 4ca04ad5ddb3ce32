//! Image upload error types.

use thiserror::Error;

/// Image host upload error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum UploadError {
    #[error("network error during upload: {message}")]
    Network { message: String },

    #[error("image host response missing URL: {message}")]
    MalformedResponse { message: String },

    #[error("image host returned HTTP {status}")]
    Provider { status: u16 },

    #[error("failed to read screenshot file: {message}")]
    FileRead { message: String },
}

impl UploadError {
    /// Creates a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates a malformed response error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Creates a file read error.
    #[must_use]
    pub fn file_read(message: impl Into<String>) -> Self {
        Self::FileRead {
            message: message.into(),
        }
    }
}
