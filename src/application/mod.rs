//! Application layer with the capture orchestration services.

/// Service implementations.
pub mod services;

pub use services::{CaptureService, LookupError, find_player};
