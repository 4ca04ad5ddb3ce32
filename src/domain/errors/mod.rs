//! Domain error types.

mod capture_error;
mod config_error;
mod console_error;
mod notify_error;
mod upload_error;

pub use capture_error::CaptureError;
pub use config_error::ConfigError;
pub use console_error::ConsoleError;
pub use notify_error::NotifyError;
pub use upload_error::UploadError;
