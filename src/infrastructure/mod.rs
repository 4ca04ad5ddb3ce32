//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// RCON game console adapter.
pub mod console;
/// Discord webhook client.
pub mod discord;
/// Requester feedback adapters.
pub mod feedback;
/// ImgBB image host client.
pub mod imgbb;
/// Screenshot directory polling.
pub mod watch;

pub use config::{AppConfig, CliArgs, Command, ConfigStore, LogLevel};
pub use console::RconConsole;
pub use discord::DiscordWebhook;
pub use feedback::StdoutFeedback;
pub use imgbb::ImgbbClient;
pub use watch::PollingWatcher;
