//! Chat command vocabulary

/// A recognized chat command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `!price`: short CAD price reply
    Price,
    /// `!btcinfo`: detailed price panel
    Info,
    /// `!help`: command listing
    Help,
}

impl Command {
    /// Every command, in help order
    pub const ALL: [Command; 3] = [Command::Price, Command::Info, Command::Help];

    /// Message text that triggers this command
    pub fn trigger(self) -> &'static str {
        match self {
            Command::Price => "!price",
            Command::Info => "!btcinfo",
            Command::Help => "!help",
        }
    }

    /// Classify message text. Exact match ignoring case; no trimming and no
    /// arguments, so `"!price now"` or `" !price"` are not commands.
    pub fn classify(text: &str) -> Option<Command> {
        Self::ALL
            .into_iter()
            .find(|command| text.eq_ignore_ascii_case(command.trigger()))
    }

    /// Label used in logs and metrics
    pub fn as_str(self) -> &'static str {
        match self {
            Command::Price => "price",
            Command::Info => "btcinfo",
            Command::Help => "help",
        }
    }
}
