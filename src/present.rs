//! Reply, panel, and status line builders
//!
//! Everything here is pure: the caller supplies the quote and the clock.

use crate::format::format_money;
use crate::price::PriceQuote;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Accent color of the info panel (gold)
pub const INFO_PANEL_COLOR: u32 = 0xFFD700;
/// Accent color of the help panel (green)
pub const HELP_PANEL_COLOR: u32 = 0x00FF00;

/// Title of the info panel
pub const INFO_PANEL_TITLE: &str = "Bitcoin Price Information";
/// Footer of the info panel, crediting the price source
pub const INFO_PANEL_FOOTER: &str = "Powered by CoinDesk API";
/// Title of the help panel
pub const HELP_PANEL_TITLE: &str = "Bitcoin Bot Commands";

/// Info panel label for the USD price
pub const USD_FIELD: &str = "💵 Price (USD)";
/// Info panel label for the converted CAD price
pub const CAD_FIELD: &str = "🇨🇦 Price (CAD)";
/// Info panel label for the upstream update time
pub const UPDATED_FIELD: &str = "📅 Last Updated";

/// A structured multi-field message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panel {
    pub title: String,
    pub description: Option<String>,
    pub color: u32,
    pub fields: Vec<PanelField>,
    pub footer: Option<String>,
    /// Generation time
    pub timestamp: DateTime<Utc>,
}

/// One labeled panel field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl PanelField {
    fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }
}

/// Plain-text answer to `!price`
pub fn build_reply(quote: &PriceQuote) -> String {
    format!(
        "The current Bitcoin price in CAD is: {}",
        format_money(quote.cad_price)
    )
}

/// Detailed panel for `!btcinfo`
///
/// Field order and labels are part of the bot's visible interface.
pub fn build_info_panel(quote: &PriceQuote, now: DateTime<Utc>) -> Panel {
    Panel {
        title: INFO_PANEL_TITLE.to_string(),
        description: None,
        color: INFO_PANEL_COLOR,
        fields: vec![
            PanelField::new(USD_FIELD, format_money(quote.usd_price), true),
            PanelField::new(CAD_FIELD, format_money(quote.cad_price), true),
            PanelField::new(UPDATED_FIELD, quote.updated_at.as_str(), false),
        ],
        footer: Some(INFO_PANEL_FOOTER.to_string()),
        timestamp: now,
    }
}

/// Static command listing for `!help`
pub fn build_help_panel(now: DateTime<Utc>) -> Panel {
    Panel {
        title: HELP_PANEL_TITLE.to_string(),
        description: Some("Here are the available commands:".to_string()),
        color: HELP_PANEL_COLOR,
        fields: vec![
            PanelField::new("!price", "Get the current Bitcoin price in CAD.", false),
            PanelField::new("!btcinfo", "Get detailed Bitcoin price information.", false),
            PanelField::new("!help", "Show this help message.", false),
        ],
        footer: None,
        timestamp: now,
    }
}

/// Presence text shown by the periodic status refresh
pub fn build_status_line(quote: &PriceQuote) -> String {
    format!(
        "BTC-CAD: {} | Updated: {}",
        format_money(quote.cad_price),
        quote.updated_at
    )
}
