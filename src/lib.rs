//! cod4snap - Player screenshot capture for CoD4X servers.
//!
//! This crate automates taking in-game screenshots of players on CoD4X
//! servers: it triggers the capture over RCON, waits for the screenshot
//! file to land in the server's save directory, uploads it to ImgBB and
//! posts the shareable link to a Discord webhook.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the capture orchestration service.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "cod4snap";
