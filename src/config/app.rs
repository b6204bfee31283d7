//! Application configuration loaded from `config.toml`.
//!
//! Every section has defaults so the bot can start against a local ordering API
//! without any file at all. The Discord token is deliberately not part of this
//! structure; it is read from the environment right before the client starts.

use crate::config::verification::VerificationConfig;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, warn};

/// Environment variable that points at an alternative config file.
pub const CONFIG_PATH_ENV: &str = "CANTEEN_CONFIG";
/// Environment variable that overrides `api.base_url`.
pub const API_URL_ENV: &str = "CANTEEN_API_URL";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `[bot]`
    pub bot: BotConfig,
    /// `[api]`
    pub api: ApiConfig,
    /// `[ticket]`
    pub ticket: TicketConfig,
    /// `[verification]`
    pub verification: VerificationConfig,
}

/// Discord-side settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Prefix for text commands
    pub prefix: String,
    /// Register slash commands in this guild only (instant updates while developing)
    pub dev_guild_id: Option<u64>,
    /// Presence text shown under the bot's name
    pub activity: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            prefix: "!".to_string(),
            dev_guild_id: None,
            activity: "Type !login <student id> to verify".to_string(),
        }
    }
}

/// Where the canteen ordering API lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL without a trailing slash
    pub base_url: String,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 10,
        }
    }
}

/// How ticket channels are recognised.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TicketConfig {
    /// Ticket channels are the ones whose name starts with this
    pub channel_prefix: String,
    /// Display name of the helper bot that opens tickets
    pub helper_bot_name: String,
}

impl Default for TicketConfig {
    fn default() -> Self {
        Self {
            channel_prefix: "ticket-".to_string(),
            helper_bot_name: "Ticket Tool".to_string(),
        }
    }
}

/// Parses configuration from a TOML string.
///
/// # Errors
/// Returns [`Error::Config`] if the TOML syntax is invalid or a field has the wrong type.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or does not parse.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;
    parse_config(&contents)
}

/// Loads the configuration the bot runs with.
///
/// The file named by `CANTEEN_CONFIG` (or `./config.toml`) is used when it
/// exists, defaults otherwise. `CANTEEN_API_URL` wins over the file.
///
/// # Errors
/// Returns an error if an existing config file cannot be read or parsed.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "config.toml".to_string());

    let mut config = if Path::new(&path).exists() {
        let config = load_config(&path)?;
        info!("Loaded configuration from {}", path);
        config
    } else {
        warn!("Config file {} not found, using defaults", path);
        AppConfig::default()
    };

    if let Ok(url) = std::env::var(API_URL_ENV) {
        config.api.base_url = url;
    }
    config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();

    info!(
        "Ordering API at {}, {} registered students",
        config.api.base_url,
        config.verification.students.len()
    );
    Ok(config)
}
