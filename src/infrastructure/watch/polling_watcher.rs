//! Polling screenshot watcher.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use tokio::fs;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::domain::ports::{WatchOutcome, WatcherPort};

/// Default attempt budget, matching the server-side retrieval window.
pub const DEFAULT_ATTEMPTS: u32 = 24;

/// Default poll interval in seconds.
pub const DEFAULT_INTERVAL_SECS: u64 = 5;

/// Polls the server's screenshot directory for an expected file.
///
/// Screenshots can take a while to reach the server depending on the
/// client's connection, so the watcher retries on a fixed interval until
/// its attempt budget runs out (24 x 5s bounds the wait to two minutes).
/// A file only counts as found once its size is non-zero and unchanged
/// between two consecutive polls, so a file still being written is never
/// handed to the uploader.
pub struct PollingWatcher {
    dir: PathBuf,
    attempts: u32,
    interval: Duration,
}

impl PollingWatcher {
    /// Creates a watcher over the given screenshot directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, attempts: u32, interval: Duration) -> Self {
        Self {
            dir: dir.into(),
            attempts,
            interval,
        }
    }

    /// Creates a watcher with the default attempt budget.
    #[must_use]
    pub fn with_defaults(dir: impl Into<PathBuf>) -> Self {
        Self::new(
            dir,
            DEFAULT_ATTEMPTS,
            Duration::from_secs(DEFAULT_INTERVAL_SECS),
        )
    }

    /// Total time the watcher will wait before giving up.
    #[must_use]
    pub fn budget(&self) -> Duration {
        self.interval * self.attempts
    }
}

#[async_trait]
impl WatcherPort for PollingWatcher {
    async fn wait_for(&self, file_name: &str) -> WatchOutcome {
        let path = self.dir.join(file_name);
        let mut last_len: Option<u64> = None;

        for attempt in 1..=self.attempts {
            sleep(self.interval).await;
            debug!(
                attempt,
                total = self.attempts,
                file = %path.display(),
                "Polling for screenshot"
            );

            match fs::metadata(&path).await {
                Ok(meta) if meta.len() > 0 => {
                    if last_len == Some(meta.len()) {
                        info!(file = %path.display(), size = meta.len(), "Screenshot file settled");
                        return WatchOutcome::Found(path);
                    }
                    debug!(file = %path.display(), size = meta.len(), "Screenshot file still growing");
                    last_len = Some(meta.len());
                }
                _ => {
                    last_len = None;
                }
            }
        }

        WatchOutcome::TimedOut {
            waited: self.budget(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn fast_watcher(dir: impl Into<PathBuf>, attempts: u32) -> PollingWatcher {
        PollingWatcher::new(dir, attempts, Duration::from_millis(10))
    }

    #[tokio::test]
    async fn test_times_out_when_nothing_appears() {
        let dir = tempdir().unwrap();
        let watcher = fast_watcher(dir.path(), 3);

        let outcome = watcher.wait_for("missing.jpg").await;

        assert_eq!(
            outcome,
            WatchOutcome::TimedOut {
                waited: Duration::from_millis(30)
            }
        );
    }

    #[tokio::test]
    async fn test_finds_settled_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("shot.jpg"), b"jpeg bytes").unwrap();
        let watcher = fast_watcher(dir.path(), 10);

        let outcome = watcher.wait_for("shot.jpg").await;

        assert_eq!(outcome, WatchOutcome::Found(dir.path().join("shot.jpg")));
    }

    #[tokio::test]
    async fn test_finds_file_appearing_after_a_few_polls() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("late.jpg");
        let writer = {
            let path = path.clone();
            tokio::spawn(async move {
                sleep(Duration::from_millis(35)).await;
                tokio::fs::write(&path, b"jpeg bytes").await.unwrap();
            })
        };

        let watcher = fast_watcher(dir.path(), 30);
        let outcome = watcher.wait_for("late.jpg").await;

        writer.await.unwrap();
        assert_eq!(outcome, WatchOutcome::Found(path));
    }

    #[tokio::test]
    async fn test_ignores_other_files() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("someone_else.jpg"), b"jpeg bytes").unwrap();
        let watcher = fast_watcher(dir.path(), 3);

        let outcome = watcher.wait_for("expected.jpg").await;

        assert!(matches!(outcome, WatchOutcome::TimedOut { .. }));
    }

    #[tokio::test]
    async fn test_empty_file_is_not_found() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("empty.jpg"), b"").unwrap();
        let watcher = fast_watcher(dir.path(), 3);

        let outcome = watcher.wait_for("empty.jpg").await;

        assert!(matches!(outcome, WatchOutcome::TimedOut { .. }));
    }
}
