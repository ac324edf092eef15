//! CLI interface for btc-price-bot
//!
//! Provides subcommands for:
//! - `run`: Connect to Discord and serve commands
//! - `price`: Fetch and print one quote
//! - `config`: Show configuration

mod price;
mod run;

pub use price::PriceArgs;
pub use run::RunArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "btc-price-bot")]
#[command(about = "Discord bot that reports the current Bitcoin price in CAD")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Connect to Discord and serve commands
    Run(RunArgs),
    /// Fetch one quote and print what the bot would show
    Price(PriceArgs),
    /// Show configuration
    Config,
}
