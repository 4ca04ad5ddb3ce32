//! Requester feedback adapters.

use tracing::info;

use crate::domain::ports::FeedbackPort;

/// Feedback adapter printing outcome messages to standard output.
///
/// The CLI is the requester, so feedback lands on the operator's terminal.
#[derive(Debug, Default)]
pub struct StdoutFeedback;

impl StdoutFeedback {
    /// Creates a new stdout feedback adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FeedbackPort for StdoutFeedback {
    fn send(&self, recipient: &str, text: &str) {
        info!(recipient, "Delivering capture feedback");
        println!("[{recipient}] {text}");
    }
}
