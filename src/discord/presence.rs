//! Discord presence sink

use crate::status::PresenceSink;
use async_trait::async_trait;
use serenity::all::{ActivityData, Context, OnlineStatus};

/// Shows the status line as a "Watching" activity
pub struct DiscordPresence {
    ctx: Context,
}

impl DiscordPresence {
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl PresenceSink for DiscordPresence {
    async fn set_status(&self, line: &str) {
        self.ctx
            .set_presence(Some(ActivityData::watching(line)), OnlineStatus::Online);
    }
}
