//! Screenshot directory polling.

mod polling_watcher;

pub use polling_watcher::PollingWatcher;
