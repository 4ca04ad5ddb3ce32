//! ImgBB upload HTTP client.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use tracing::{debug, warn};

use super::dto::UploadResponse;
use crate::domain::entities::UploadResult;
use crate::domain::errors::UploadError;
use crate::domain::ports::ImageHostPort;

const IMGBB_UPLOAD_URL: &str = "https://api.imgbb.com/1/upload";

/// Shortest link expiry ImgBB accepts, in seconds.
pub const MIN_EXPIRATION_SECS: u64 = 60;
/// Longest link expiry ImgBB accepts (180 days), in seconds.
pub const MAX_EXPIRATION_SECS: u64 = 15_552_000;

/// Clamps a link expiry to the bounds ImgBB accepts.
///
/// Anything under a minute means "no expiry" (0); anything above the
/// 180-day cap is pinned to the cap. Enforced before the request so the
/// provider never rejects it.
#[must_use]
pub const fn clamp_expiration(secs: u64) -> u64 {
    if secs < MIN_EXPIRATION_SECS {
        0
    } else if secs > MAX_EXPIRATION_SECS {
        MAX_EXPIRATION_SECS
    } else {
        secs
    }
}

/// ImgBB upload client.
pub struct ImgbbClient {
    client: Client,
    api_key: String,
    expiration: u64,
    base_url: String,
}

impl ImgbbClient {
    /// Creates a new client against the public ImgBB endpoint.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(api_key: impl Into<String>, expiration: u64) -> Result<Self, UploadError> {
        Self::with_base_url(api_key, expiration, IMGBB_UPLOAD_URL)
    }

    /// Creates a client with a custom endpoint URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(
        api_key: impl Into<String>,
        expiration: u64,
        base_url: impl Into<String>,
    ) -> Result<Self, UploadError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| UploadError::network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            expiration: clamp_expiration(expiration),
            base_url: base_url.into(),
        })
    }

    /// Returns the effective (clamped) link expiry in seconds.
    #[must_use]
    pub const fn expiration(&self) -> u64 {
        self.expiration
    }
}

#[async_trait]
impl ImageHostPort for ImgbbClient {
    async fn upload(&self, path: &Path) -> Result<UploadResult, UploadError> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            warn!(file = %path.display(), error = %e, "Failed to read screenshot");
            UploadError::file_read(format!("{}: {e}", path.display()))
        })?;

        debug!(file = %path.display(), size = bytes.len(), "Uploading screenshot to ImgBB");

        let mut form = vec![
            ("key", self.api_key.clone()),
            ("image", STANDARD.encode(&bytes)),
        ];
        if self.expiration > 0 {
            form.push(("expiration", self.expiration.to_string()));
        }

        let response = self
            .client
            .post(&self.base_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach ImgBB");
                if e.is_timeout() {
                    UploadError::network("request timed out")
                } else if e.is_connect() {
                    UploadError::network("failed to connect to ImgBB")
                } else {
                    UploadError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "ImgBB rejected the upload");
            return Err(UploadError::Provider {
                status: status.as_u16(),
            });
        }

        let raw: serde_json::Value = response
            .json()
            .await
            .map_err(|e| UploadError::malformed(format!("failed to parse response: {e}")))?;

        let parsed: UploadResponse = serde_json::from_value(raw.clone())
            .map_err(|e| UploadError::malformed(e.to_string()))?;

        let url = parsed
            .data
            .and_then(|d| d.url)
            .ok_or_else(|| UploadError::malformed("response carries no data.url field"))?;

        debug!(url = %url, "Screenshot uploaded");

        Ok(UploadResult::new(url, raw))
    }
}
