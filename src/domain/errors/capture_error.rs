//! Capture workflow error types.

use thiserror::Error;

use super::{ConsoleError, NotifyError, UploadError};

/// Capture workflow error variants.
///
/// All of these are recoverable: the request is reported to the requester
/// and its in-flight entry released, nothing propagates past the capture
/// task.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum CaptureError {
    #[error("a screenshot of {name} is already in progress")]
    AlreadyInProgress { name: String },

    #[error("{name} is a bot, screenshot will not be taken")]
    BotTarget { name: String },

    #[error("no screenshot for {name} appeared within {waited_secs}s")]
    Timeout { name: String, waited_secs: u64 },

    #[error("failed to send capture command: {0}")]
    Trigger(#[from] ConsoleError),

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error(transparent)]
    Notify(#[from] NotifyError),
}

impl CaptureError {
    /// Creates an already-in-progress rejection.
    #[must_use]
    pub fn already_in_progress(name: impl Into<String>) -> Self {
        Self::AlreadyInProgress { name: name.into() }
    }

    /// Creates a bot-target rejection.
    #[must_use]
    pub fn bot_target(name: impl Into<String>) -> Self {
        Self::BotTarget { name: name.into() }
    }

    /// Returns whether the request was rejected before any side effect.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::AlreadyInProgress { .. } | Self::BotTarget { .. })
    }
}
