//! btc-price-bot: Discord bot reporting the current Bitcoin price in CAD
//!
//! This library provides the core components for:
//! - Fetching the BTC/USD rate from CoinDesk and converting it to CAD
//! - Money formatting
//! - Reply, panel, and status line builders
//! - Chat command classification and dispatch
//! - Periodic presence refresh
//! - Discord gateway integration
//! - Configuration and observability

pub mod bot;
pub mod cli;
pub mod config;
pub mod discord;
pub mod format;
pub mod present;
pub mod price;
pub mod status;
pub mod telemetry;
