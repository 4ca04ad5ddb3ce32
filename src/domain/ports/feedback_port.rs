//! Requester feedback port definition.

/// Port for delivering outcome messages back to the requesting admin.
pub trait FeedbackPort: Send + Sync {
    /// Sends one line of feedback to the named requester.
    fn send(&self, recipient: &str, text: &str);
}
