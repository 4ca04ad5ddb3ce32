mod console_port;
mod feedback_port;
mod image_host_port;
mod watcher_port;
mod webhook_port;

pub use console_port::ConsolePort;
pub use feedback_port::FeedbackPort;
pub use image_host_port::ImageHostPort;
pub use watcher_port::{WatchOutcome, WatcherPort};
pub use webhook_port::WebhookPort;

#[cfg(test)]
pub mod mocks {
    pub use super::console_port::mock::MockConsole;
    pub use super::feedback_port::mock::MockFeedback;
    pub use super::image_host_port::mock::MockImageHost;
    pub use super::watcher_port::mock::MockWatcher;
    pub use super::webhook_port::mock::MockWebhook;
}
