//! Presence refresh module
//!
//! Periodically pushes the latest CAD price to the bot's status line

mod updater;

pub use updater::{LastUpdated, StatusUpdater, TickOutcome};

use async_trait::async_trait;

/// Trait for anything that can display the bot's status line
#[async_trait]
pub trait PresenceSink: Send + Sync {
    /// Replace the displayed status line
    async fn set_status(&self, line: &str);
}
