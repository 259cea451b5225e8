//! Chat command parsing.

/// A recognized bot command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Start,
    /// Boss name as typed; may be empty.
    Guess(String),
    List,
    Forfeit,
    Stats,
}

impl Command {
    /// Parse a message; `None` for anything that is not a command.
    ///
    /// The verb must be the first whitespace-delimited token, so `!starting`
    /// is not `!start`.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let (verb, rest) = match text.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (text, ""),
        };

        let command = match verb {
            "!help" => Self::Help,
            "!start" => Self::Start,
            "!guess" => Self::Guess(rest.to_string()),
            "!list" => Self::List,
            "!ff" => Self::Forfeit,
            "!stats" => Self::Stats,
            _ => return None,
        };
        Some(command)
    }

    /// Verb as typed by players.
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Help => "!help",
            Self::Start => "!start",
            Self::Guess(_) => "!guess",
            Self::List => "!list",
            Self::Forfeit => "!ff",
            Self::Stats => "!stats",
        }
    }
}
