//! Gateway event handler

use super::{panel_to_embed, DiscordPresence};
use crate::bot::{Dispatcher, Response};
use crate::price::PriceSource;
use crate::status::StatusUpdater;
use async_trait::async_trait;
use serenity::all::{Context, CreateMessage, EventHandler, Message, Ready};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Routes messages to the dispatcher and starts the status refresh
pub struct Handler {
    source: Arc<dyn PriceSource>,
    dispatcher: Dispatcher,
    update_interval: Duration,
    status_started: AtomicBool,
}

impl Handler {
    pub fn new(source: Arc<dyn PriceSource>, update_interval: Duration) -> Self {
        Self {
            dispatcher: Dispatcher::new(Arc::clone(&source)),
            source,
            update_interval,
            status_started: AtomicBool::new(false),
        }
    }

    async fn send(&self, ctx: &Context, msg: &Message, response: Response) -> serenity::Result<()> {
        match response {
            Response::Reply(text) => {
                msg.reply(ctx, text).await?;
            }
            Response::Panel(panel) => {
                let message = CreateMessage::new().embed(panel_to_embed(&panel));
                msg.channel_id.send_message(ctx, message).await?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        let Some(response) = self.dispatcher.dispatch(&msg.content).await else {
            return;
        };

        if let Err(e) = self.send(&ctx, &msg, response).await {
            tracing::warn!(
                channel_id = %msg.channel_id,
                error = %e,
                "Failed to send response"
            );
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!(user = %ready.user.name, "Bot is online and running!");

        // The gateway re-sends Ready after a reconnect; keep a single loop.
        if self.status_started.swap(true, Ordering::SeqCst) {
            tracing::debug!("Status refresh already running");
            return;
        }

        let presence = Arc::new(DiscordPresence::new(ctx));
        let updater = Arc::new(StatusUpdater::new(Arc::clone(&self.source), presence));
        updater.spawn(self.update_interval);

        tracing::info!(
            interval_ms = self.update_interval.as_millis() as u64,
            "Status refresh started"
        );
    }
}
