use super::app_config::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "cod4snap",
    version,
    about = "Captures player screenshots on CoD4X servers and shares them to Discord",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// RCON address of the game server.
    #[arg(long, value_name = "HOST:PORT")]
    pub rcon_address: Option<String>,

    /// RCON password.
    #[arg(long, env = "COD4SNAP_RCON_PASSWORD", hide_env_values = true)]
    pub rcon_password: Option<String>,

    /// Directory the server writes screenshots into.
    #[arg(long, value_name = "PATH")]
    pub screenshot_dir: Option<PathBuf>,

    /// Server name used in Discord messages.
    #[arg(long)]
    pub server_label: Option<String>,

    /// ImgBB API key.
    #[arg(long, env = "COD4SNAP_IMGBB_API_KEY", hide_env_values = true)]
    pub imgbb_api_key: Option<String>,

    /// Uploaded link expiry in seconds (0 keeps links forever).
    #[arg(long)]
    pub link_expire: Option<u64>,

    /// Discord webhook URL.
    #[arg(long, env = "COD4SNAP_DISCORD_WEBHOOK", hide_env_values = true)]
    pub discord_webhook: Option<String>,

    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Capture a player's screen and share the link.
    Capture {
        /// Player name or client slot number.
        target: String,

        /// Name credited as the requester in the Discord message.
        #[arg(long, default_value = "console")]
        requester: String,
    },
    /// List connected players.
    Players,
}
