//! Command handling module
//!
//! Classifies chat messages and turns them into platform-neutral responses

mod command;
mod dispatcher;

pub use command::Command;
pub use dispatcher::{Dispatcher, INFO_FALLBACK, PRICE_FALLBACK};

use crate::present::Panel;

/// What to send back for a handled command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Plain text, sent as a reply to the triggering message
    Reply(String),
    /// Structured panel, sent to the originating channel
    Panel(Panel),
}
