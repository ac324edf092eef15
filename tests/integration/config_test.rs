//! Integration tests for configuration loading

use btc_price_bot::config::{Config, ConfigError};
use std::io::Write;
use std::time::Duration;

#[test]
fn test_example_config_loads() {
    let config = Config::from_toml(include_str!("../../config.toml.example")).unwrap();
    assert_eq!(config.discord.token_env, "BOT_TOKEN");
    assert_eq!(config.status.update_interval(), Duration::from_secs(60));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[status]\nupdate_interval_ms = 15000").unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.status.update_interval_ms, 15_000);
    assert_eq!(config.price.timeout_secs, 10);
}

#[test]
fn test_load_invalid_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[status\nupdate_interval_ms = ").unwrap();

    assert!(matches!(Config::load(file.path()), Err(ConfigError::Toml(_))));
}

#[test]
fn test_default_config_is_valid() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_config_round_trips_through_display() {
    let rendered = toml::to_string_pretty(&Config::default()).unwrap();
    let parsed = Config::from_toml(&rendered).unwrap();
    assert_eq!(parsed.status.update_interval_ms, 60_000);
    assert_eq!(parsed.telemetry.log_level, "info");
}
