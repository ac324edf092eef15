//! Configuration types for btc-price-bot

use crate::price::{CoinDeskConfig, COINDESK_API_URL};
use crate::telemetry::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Config file is not valid TOML for this schema
    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    /// Bot token environment variable is unset or empty
    #[error("Bot token not set: export {0} or add it to .env")]
    MissingToken(String),
    /// A configured duration is zero
    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub discord: DiscordConfig,
    #[serde(default)]
    pub price: PriceConfig,
    #[serde(default)]
    pub status: StatusConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Discord gateway configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiscordConfig {
    /// Environment variable holding the bot token
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

fn default_token_env() -> String {
    "BOT_TOKEN".to_string()
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token_env: default_token_env(),
        }
    }
}

impl DiscordConfig {
    /// Read the bot token from the process environment
    pub fn token(&self) -> Result<String, ConfigError> {
        match std::env::var(&self.token_env) {
            Ok(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
            _ => Err(ConfigError::MissingToken(self.token_env.clone())),
        }
    }
}

/// Price API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PriceConfig {
    /// Current-price endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    COINDESK_API_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for PriceConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PriceConfig {
    /// Client settings for the CoinDesk client
    pub fn client_config(&self) -> CoinDeskConfig {
        CoinDeskConfig {
            api_url: self.api_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

/// Status refresh configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatusConfig {
    /// Refresh interval (milliseconds)
    #[serde(default = "default_update_interval_ms")]
    pub update_interval_ms: u64,
}

fn default_update_interval_ms() -> u64 {
    60_000
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            update_interval_ms: default_update_interval_ms(),
        }
    }
}

impl StatusConfig {
    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Prometheus scrape port; no exporter when unset
    #[serde(default)]
    pub metrics_port: Option<u16>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            metrics_port: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the runtime cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.status.update_interval_ms == 0 {
            return Err(ConfigError::ZeroDuration("status.update_interval_ms"));
        }
        if self.price.timeout_secs == 0 {
            return Err(ConfigError::ZeroDuration("price.timeout_secs"));
        }
        Ok(())
    }
}
