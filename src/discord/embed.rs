//! Panel to Discord embed conversion

use crate::present::Panel;
use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};

/// Render a panel as a Discord embed
pub fn panel_to_embed(panel: &Panel) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(panel.title.as_str())
        .color(panel.color)
        .fields(
            panel
                .fields
                .iter()
                .map(|f| (f.name.as_str(), f.value.as_str(), f.inline)),
        );

    if let Some(description) = &panel.description {
        embed = embed.description(description.as_str());
    }
    if let Some(footer) = &panel.footer {
        embed = embed.footer(CreateEmbedFooter::new(footer.as_str()));
    }
    if let Ok(timestamp) = Timestamp::from_unix_timestamp(panel.timestamp.timestamp()) {
        embed = embed.timestamp(timestamp);
    }

    embed
}
