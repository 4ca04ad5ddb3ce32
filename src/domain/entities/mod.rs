//! Entity definitions.

mod capture;
mod player;
mod upload;

pub use capture::{CaptureRequest, CaptureStatus, capture_token, sanitize_name, strip_color_codes};
pub use player::{ClientId, Player};
pub use upload::UploadResult;
