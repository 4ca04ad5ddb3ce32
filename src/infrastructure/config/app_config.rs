//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::errors::ConfigError;

const APP_NAME: &str = "cod4snap";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "tecknian";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration from file and CLI.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Game server connection settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// ImgBB upload settings.
    #[serde(default)]
    pub imgbb: ImgbbConfig,

    /// Discord webhook settings.
    #[serde(default)]
    pub discord: DiscordConfig,

    /// Screenshot watch settings.
    #[serde(default)]
    pub watch: WatchConfig,
}

/// Game server connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// RCON address (`host:port`).
    #[serde(default = "default_rcon_address")]
    pub rcon_address: String,

    /// RCON password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rcon_password: Option<String>,

    /// Directory the server writes screenshots into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot_dir: Option<PathBuf>,

    /// Server name used in Discord messages. Queried from `sv_hostname`
    /// when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            rcon_address: default_rcon_address(),
            rcon_password: None,
            screenshot_dir: None,
            label: None,
        }
    }
}

/// ImgBB upload settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImgbbConfig {
    /// ImgBB API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Uploaded link expiry in seconds; 0 keeps links forever.
    #[serde(default)]
    pub link_expire: u64,
}

/// Discord webhook settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    /// Webhook URL to post screenshot links to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    /// Name the webhook posts under.
    #[serde(default = "default_webhook_username")]
    pub username: String,
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            username: default_webhook_username(),
        }
    }
}

/// Screenshot watch settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// How many times to poll before giving up.
    #[serde(default = "default_watch_attempts")]
    pub attempts: u32,

    /// Seconds between polls.
    #[serde(default = "default_watch_interval")]
    pub interval_secs: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            attempts: default_watch_attempts(),
            interval_secs: default_watch_interval(),
        }
    }
}

fn default_rcon_address() -> String {
    "127.0.0.1:28960".to_string()
}

fn default_webhook_username() -> String {
    APP_NAME.to_string()
}

fn default_watch_attempts() -> u32 {
    24
}

fn default_watch_interval() -> u64 {
    5
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(rcon_address) = &args.rcon_address {
            self.server.rcon_address = rcon_address.clone();
        }
        if let Some(rcon_password) = &args.rcon_password {
            self.server.rcon_password = Some(rcon_password.clone());
        }
        if let Some(screenshot_dir) = &args.screenshot_dir {
            self.server.screenshot_dir = Some(screenshot_dir.clone());
        }
        if let Some(server_label) = &args.server_label {
            self.server.label = Some(server_label.clone());
        }
        if let Some(api_key) = &args.imgbb_api_key {
            self.imgbb.api_key = Some(api_key.clone());
        }
        if let Some(link_expire) = args.link_expire {
            self.imgbb.link_expire = link_expire;
        }
        if let Some(webhook_url) = &args.discord_webhook {
            self.discord.webhook_url = Some(webhook_url.clone());
        }
    }

    /// Returns the RCON password.
    ///
    /// # Errors
    /// Returns error if the setting is absent or empty.
    pub fn rcon_password(&self) -> Result<&str, ConfigError> {
        require(self.server.rcon_password.as_deref(), "server.rcon_password")
    }

    /// Returns the screenshot directory.
    ///
    /// # Errors
    /// Returns error if the setting is absent.
    pub fn screenshot_dir(&self) -> Result<&Path, ConfigError> {
        self.server
            .screenshot_dir
            .as_deref()
            .ok_or(ConfigError::missing("server.screenshot_dir"))
    }

    /// Returns the ImgBB API key.
    ///
    /// # Errors
    /// Returns error if the setting is absent or empty.
    pub fn imgbb_api_key(&self) -> Result<&str, ConfigError> {
        require(self.imgbb.api_key.as_deref(), "imgbb.api_key")
    }

    /// Returns the Discord webhook URL.
    ///
    /// # Errors
    /// Returns error if the setting is absent or empty.
    pub fn discord_webhook(&self) -> Result<&str, ConfigError> {
        require(self.discord.webhook_url.as_deref(), "discord.webhook_url")
    }

    /// Checks that every required setting is present and sane.
    ///
    /// # Errors
    /// Returns the first `ConfigError` encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rcon_password()?;
        self.screenshot_dir()?;
        self.imgbb_api_key()?;
        self.discord_webhook()?;

        if self.watch.attempts == 0 {
            return Err(ConfigError::invalid("watch.attempts", "must be at least 1"));
        }
        if self.watch.interval_secs == 0 {
            return Err(ConfigError::invalid(
                "watch.interval_secs",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("cod4snap.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

fn require<'a>(value: Option<&'a str>, key: &'static str) -> Result<&'a str, ConfigError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::missing(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_config() -> AppConfig {
        let toml_content = r#"
            [server]
            rcon_address = "192.168.1.10:28960"
            rcon_password = "secret"
            screenshot_dir = "/srv/cod4/screenshots"

            [imgbb]
            api_key = "abc123"
            link_expire = 3600

            [discord]
            webhook_url = "https://discord.com/api/webhooks/1/x"
        "#;
        toml::from_str(toml_content).expect("Failed to parse config")
    }

    #[test]
    fn test_parse_complete_config() {
        let config = complete_config();

        assert_eq!(config.server.rcon_address, "192.168.1.10:28960");
        assert_eq!(config.imgbb.link_expire, 3600);
        assert_eq!(config.discord.username, "cod4snap");
        assert_eq!(config.watch.attempts, 24);
        assert_eq!(config.watch.interval_secs, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_fails_validation() {
        let config = AppConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingValue { .. })
        ));
    }

    #[test]
    fn test_empty_password_is_missing() {
        let mut config = complete_config();
        config.server.rcon_password = Some("  ".to_string());
        assert!(matches!(
            config.rcon_password(),
            Err(ConfigError::MissingValue {
                key: "server.rcon_password"
            })
        ));
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let mut config = complete_config();
        config.watch.attempts = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { .. })
        ));
    }
}
