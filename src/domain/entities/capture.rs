//! Capture request entity and name sanitization.

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

/// Strips CoD4 `^digit` color codes from a name.
#[must_use]
pub fn strip_color_codes(name: &str) -> String {
    static COLOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\^[0-9]").unwrap());
    COLOR_RE.replace_all(name, "").into_owned()
}

/// Sanitizes a player name for use as a screenshot file name.
///
/// Color codes are stripped, spaces become underscores and anything the
/// server's filesystem could choke on is dropped.
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    strip_color_codes(name)
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('_'),
            c if c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.' => Some(c),
            _ => None,
        })
        .collect()
}

/// Lifecycle of a single capture request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureStatus {
    /// Request accepted, trigger not yet sent.
    Pending,
    /// Trigger sent, polling for the screenshot file.
    Watching,
    /// Screenshot file located on disk.
    Found,
    /// Upload to the image host in progress.
    Uploading,
    /// Webhook notification in progress.
    Notifying,
    /// Link delivered to the webhook.
    Completed,
    /// No screenshot file appeared within the attempt budget.
    TimedOut,
    /// Image host rejected or dropped the upload.
    UploadFailed,
    /// Webhook rejected or dropped the notification.
    NotifyFailed,
}

impl CaptureStatus {
    /// Returns whether this status ends the request.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Completed | Self::TimedOut | Self::UploadFailed | Self::NotifyFailed
        )
    }
}

/// A single screenshot capture request.
///
/// Owned exclusively by the capture service for its lifetime and discarded
/// once a terminal status has been reached and reported.
#[derive(Debug, Clone)]
pub struct CaptureRequest {
    player: super::Player,
    requester: String,
    token: String,
    created_at: DateTime<Utc>,
    status: CaptureStatus,
}

impl CaptureRequest {
    /// Creates a new pending request, stamping it with the current time.
    #[must_use]
    pub fn new(player: super::Player, requester: impl Into<String>) -> Self {
        Self::new_at(player, requester, Utc::now())
    }

    /// Creates a new pending request with an explicit creation time.
    #[must_use]
    pub fn new_at(
        player: super::Player,
        requester: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let token = capture_token(player.name(), created_at);
        Self {
            player,
            requester: requester.into(),
            token,
            created_at,
            status: CaptureStatus::Pending,
        }
    }

    /// Returns the target player.
    #[must_use]
    pub const fn player(&self) -> &super::Player {
        &self.player
    }

    /// Returns the requesting admin's name.
    #[must_use]
    pub fn requester(&self) -> &str {
        &self.requester
    }

    /// Returns the file-name token passed to the server.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the screenshot file name the server will write.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.jpg", self.token)
    }

    /// Returns when the request was created.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> CaptureStatus {
        self.status
    }

    /// Advances the request to a new status.
    pub fn set_status(&mut self, status: CaptureStatus) {
        self.status = status;
    }
}

/// Builds the deterministic screenshot token for a player name.
///
/// The token is handed to the server as the screenshot name argument, so
/// the watcher knows the exact file to wait for. The timestamp suffix keeps
/// repeat captures of the same player from colliding with stale files.
#[must_use]
pub fn capture_token(name: &str, at: DateTime<Utc>) -> String {
    format!("{}_{}", sanitize_name(name), at.format("%Y%m%d-%H%M%S"))
}
