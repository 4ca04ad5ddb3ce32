//! Application services.

mod capture_service;
mod player_lookup;

pub use capture_service::CaptureService;
pub use player_lookup::{LookupError, find_player};
