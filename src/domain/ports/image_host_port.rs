//! Image host port definition.

use async_trait::async_trait;
use std::path::Path;

use crate::domain::entities::UploadResult;
use crate::domain::errors::UploadError;

/// Port for uploading a screenshot to the image host.
#[async_trait]
pub trait ImageHostPort: Send + Sync {
    /// Uploads the file at `path` and returns the shareable link.
    ///
    /// Single-shot: this port never retries on its own.
    async fn upload(&self, path: &Path) -> Result<UploadResult, UploadError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    /// Mock image host recording upload attempts.
    pub struct MockImageHost {
        pub uploads: Arc<Mutex<Vec<PathBuf>>>,
        should_succeed: AtomicBool,
        url: String,
    }

    impl MockImageHost {
        pub fn new(should_succeed: bool) -> Self {
            Self {
                uploads: Arc::new(Mutex::new(Vec::new())),
                should_succeed: AtomicBool::new(should_succeed),
                url: "https://i.ibb.co/x.jpg".to_string(),
            }
        }

        pub fn upload_count(&self) -> usize {
            self.uploads.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ImageHostPort for MockImageHost {
        async fn upload(&self, path: &Path) -> Result<UploadResult, UploadError> {
            self.uploads.lock().unwrap().push(path.to_path_buf());
            if self.should_succeed.load(Ordering::SeqCst) {
                Ok(UploadResult::new(&self.url, serde_json::json!({})))
            } else {
                Err(UploadError::Provider { status: 500 })
            }
        }
    }
}
