//! Discord gateway adapter
//!
//! Connects the command dispatcher and status updater to a serenity client

mod embed;
mod handler;
mod presence;

pub use embed::panel_to_embed;
pub use handler::Handler;
pub use presence::DiscordPresence;

use crate::config::Config;
use crate::price::{CoinDeskClient, PriceSource};
use serenity::all::{Client, GatewayIntents};
use std::sync::Arc;

/// Gateway intents the bot needs to read guild messages
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT
}

/// Log in and run until the gateway connection ends
pub async fn run_bot(config: &Config) -> anyhow::Result<()> {
    let token = config.discord.token()?;
    let source: Arc<dyn PriceSource> =
        Arc::new(CoinDeskClient::with_config(config.price.client_config())?);
    let handler = Handler::new(source, config.status.update_interval());

    let mut client = Client::builder(&token, intents())
        .event_handler(handler)
        .await?;

    tracing::info!("Connecting to Discord gateway");
    client.start().await?;

    Ok(())
}
