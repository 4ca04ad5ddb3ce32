//! Configuration error types.

use thiserror::Error;

/// Configuration error variants.
///
/// Unrecoverable: any of these at startup stops the tool.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("toml deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("missing required setting: {key}")]
    MissingValue { key: &'static str },

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl ConfigError {
    /// Creates a missing-setting error.
    #[must_use]
    pub const fn missing(key: &'static str) -> Self {
        Self::MissingValue { key }
    }

    /// Creates an invalid-value error.
    #[must_use]
    pub fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}
