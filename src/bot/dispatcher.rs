//! Command dispatcher
//!
//! Runs the fetch -> present pipeline for a classified command. Fetch
//! failures end in a fixed fallback reply and never reach the caller.

use super::{Command, Response};
use crate::present::{build_help_panel, build_info_panel, build_reply};
use crate::price::PriceSource;
use crate::telemetry;
use chrono::Utc;
use std::sync::Arc;

/// Reply sent when `!price` cannot fetch a quote
pub const PRICE_FALLBACK: &str = "Failed to fetch Bitcoin price.";
/// Reply sent when `!btcinfo` cannot fetch a quote
pub const INFO_FALLBACK: &str = "Failed to fetch Bitcoin info.";

/// Maps chat messages to responses
#[derive(Clone)]
pub struct Dispatcher {
    source: Arc<dyn PriceSource>,
}

impl Dispatcher {
    /// Create a dispatcher backed by the given price source
    pub fn new(source: Arc<dyn PriceSource>) -> Self {
        Self { source }
    }

    /// Handle raw message text. `None` means the message is not a command:
    /// no request is made and nothing should be sent.
    pub async fn dispatch(&self, text: &str) -> Option<Response> {
        let command = Command::classify(text)?;
        Some(self.execute(command).await)
    }

    /// Run a command to completion
    pub async fn execute(&self, command: Command) -> Response {
        telemetry::record_command(command.as_str());

        match command {
            Command::Price => match self.source.fetch().await {
                Ok(quote) => Response::Reply(build_reply(&quote)),
                Err(e) => {
                    tracing::warn!(command = command.as_str(), error = %e, "Price fetch failed");
                    Response::Reply(PRICE_FALLBACK.to_string())
                }
            },
            Command::Info => match self.source.fetch().await {
                Ok(quote) => Response::Panel(build_info_panel(&quote, Utc::now())),
                Err(e) => {
                    tracing::warn!(command = command.as_str(), error = %e, "Price fetch failed");
                    Response::Reply(INFO_FALLBACK.to_string())
                }
            },
            Command::Help => Response::Panel(build_help_panel(Utc::now())),
        }
    }
}
