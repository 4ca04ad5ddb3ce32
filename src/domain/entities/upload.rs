//! Upload result entity.

/// Outcome of a successful image upload.
///
/// Transient, never persisted; the raw provider body is kept for logging.
#[derive(Debug, Clone)]
pub struct UploadResult {
    url: String,
    raw: serde_json::Value,
}

impl UploadResult {
    /// Creates a new upload result.
    #[must_use]
    pub fn new(url: impl Into<String>, raw: serde_json::Value) -> Self {
        Self {
            url: url.into(),
            raw,
        }
    }

    /// Returns the shareable image URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the raw provider response.
    #[must_use]
    pub const fn raw(&self) -> &serde_json::Value {
        &self.raw
    }
}
