//! Screenshot watcher port definition.

use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;

/// Result of waiting for a screenshot file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchOutcome {
    /// The file exists and its size held steady across two polls.
    Found(PathBuf),
    /// The attempt budget ran out before the file appeared.
    TimedOut {
        /// How long the watcher waited in total.
        waited: Duration,
    },
}

/// Port for waiting on a screenshot file to materialize.
#[async_trait]
pub trait WatcherPort: Send + Sync {
    /// Waits for `file_name` to appear in the screenshot directory.
    async fn wait_for(&self, file_name: &str) -> WatchOutcome;
}
