//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{CaptureRequest, CaptureStatus, ClientId, Player, UploadResult};
pub use errors::{CaptureError, ConfigError, ConsoleError, NotifyError, UploadError};
pub use ports::{ConsolePort, FeedbackPort, ImageHostPort, WatchOutcome, WatcherPort, WebhookPort};
