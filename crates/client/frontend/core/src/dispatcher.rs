//! Command dispatcher.
//!
//! Maps each [`Command`] onto exactly one [`GameRuntime`] operation and renders
//! the result as a [`Reply`]. No game rules live here: the dispatcher only
//! chooses words, colors and images.
use std::sync::Arc;

use game_core::{GameError, GuessOutcome, PlayerId};
use runtime::{GameRuntime, RuntimeError};

use crate::command::Command;
use crate::config::FrontendConfig;
use crate::format::render_verdicts;
use crate::message::InboundMessage;
use crate::reply::{Color, Embed, Reply};

/// Blank field name so list columns render without headers.
const ZERO_WIDTH_SPACE: &str = "\u{200b}";

/// Commands listed by `!help`, in display order.
const HELP_ENTRIES: [(&str, &str); 6] = [
    ("!start", "Start a new game."),
    ("!guess <name>", "Guess a boss by name."),
    ("!list", "Show the full list of bosses."),
    ("!ff", "Forfeit the current game."),
    ("!stats", "Show your personal game statistics."),
    ("!help", "Show this help message."),
];

pub const START_TEXT: &str = "🎮 A boss has been chosen for you! Guess with !guess <name>.";
pub const NO_GAME_GUESS_TEXT: &str = "No game in progress. Start a new game with !start.";
pub const NO_GAME_FORFEIT_TEXT: &str =
    "You don't have an active game. Start one with `!start`.";
pub const UNKNOWN_BOSS_TEXT: &str = "❌ Unknown boss 😅";
pub const NO_STATS_TEXT: &str = "You have not played any games yet.";
pub const INTERNAL_ERROR_TEXT: &str = "⚠️ Something went wrong on our side. Please try again.";

/// Synchronous command handler, invoked once per inbound message.
#[derive(Clone)]
pub struct Dispatcher {
    runtime: Arc<GameRuntime>,
    config: FrontendConfig,
}

impl Dispatcher {
    pub fn new(runtime: Arc<GameRuntime>, config: FrontendConfig) -> Self {
        Self { runtime, config }
    }

    pub fn runtime(&self) -> &Arc<GameRuntime> {
        &self.runtime
    }

    /// Handle one message. `None` means the bot stays silent.
    pub fn handle(&self, message: &InboundMessage) -> Option<Reply> {
        if !self.config.accepts_channel(message.channel.as_str()) {
            return None;
        }
        let command = Command::parse(&message.text)?;

        tracing::debug!(
            player = %message.player,
            channel = %message.channel,
            verb = command.verb(),
            "Dispatching command"
        );

        let reply = self
            .execute(message, &command)
            .unwrap_or_else(|err| self.error_reply(&command, err));
        Some(reply)
    }

    fn execute(&self, message: &InboundMessage, command: &Command) -> runtime::Result<Reply> {
        let player = message.player;

        match command {
            Command::Help => Ok(help_reply()),
            Command::Start => {
                self.runtime.start_game(player)?;
                Ok(Reply::text(START_TEXT))
            }
            Command::Guess(name) => self.guess(player, name),
            Command::List => Ok(self.list_reply()),
            Command::Forfeit => {
                let target = self.runtime.forfeit(player)?;
                Ok(Reply::text(format!(
                    "💀 You forfeited the current game. The boss was **{}**.",
                    target.name()
                )))
            }
            Command::Stats => self.stats_reply(player, &message.player_name),
        }
    }

    fn guess(&self, player: PlayerId, name: &str) -> runtime::Result<Reply> {
        let reply = match self.runtime.guess(player, name)? {
            GuessOutcome::Win { target, .. } => Embed::new(
                format!("🎉 Congrats! It was **{}**", target.name()),
                Color::Green,
            )
            .image(target.image()),
            GuessOutcome::Continue {
                guessed, verdicts, ..
            } => Embed::new(format!("Results for **{}**", guessed.name()), Color::Orange)
                .description(render_verdicts(&verdicts))
                .image(guessed.image()),
        };
        Ok(reply.into())
    }

    fn list_reply(&self) -> Reply {
        let names: Vec<&str> = self.runtime.boss_names().collect();

        names
            .chunks(self.config.list_chunk_size.max(1))
            .fold(
                Embed::new("📜 List of Bosses", Color::Blue),
                |embed, chunk| embed.field(ZERO_WIDTH_SPACE, chunk.join("\n"), true),
            )
            .into()
    }

    fn stats_reply(&self, player: PlayerId, player_name: &str) -> runtime::Result<Reply> {
        let Some(stats) = self.runtime.stats(player)? else {
            return Ok(Reply::text(NO_STATS_TEXT));
        };

        Ok(Reply::text(format!(
            "📊 Stats for {}:\nGames won: {}\nGames forfeited: {}\nAverage guesses per win: {:.2}",
            player_name,
            stats.won,
            stats.forfeited,
            stats.average_guesses()
        )))
    }

    fn error_reply(&self, command: &Command, err: RuntimeError) -> Reply {
        let Some(game_error) = err.as_game_error() else {
            tracing::error!(verb = command.verb(), error = %err, "Command failed");
            return Reply::text(INTERNAL_ERROR_TEXT);
        };

        tracing::debug!(
            verb = command.verb(),
            code = game_error.error_code(),
            severity = game_error.severity().as_str(),
            "Command rejected: {}",
            game_error
        );

        match game_error {
            GameError::NoActiveGame if matches!(command, Command::Forfeit) => {
                Reply::text(NO_GAME_FORFEIT_TEXT)
            }
            GameError::NoActiveGame => Reply::text(NO_GAME_GUESS_TEXT),
            GameError::UnknownEntity { .. } => Reply::text(UNKNOWN_BOSS_TEXT),
        }
    }
}

fn help_reply() -> Reply {
    HELP_ENTRIES
        .iter()
        .fold(
            Embed::new("📖 HKdle Bot - Help", Color::Purple)
                .description("List of available commands:"),
            |embed, (name, value)| embed.field(*name, *value, false),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use game_core::{BossRecord, Dataset, Field};

    use super::*;
    use crate::message::ChannelId;

    const PLAYER: PlayerId = PlayerId(42);

    fn dispatcher_with(config: FrontendConfig) -> Dispatcher {
        let dataset = Dataset::new(vec![
            BossRecord::builder("Hornet")
                .field(Field::Attacks, "Lunge, Throw")
                .image("https://img/hornet.png")
                .build(),
        ])
        .unwrap();
        let runtime = GameRuntime::builder().dataset(dataset).build().unwrap();
        Dispatcher::new(Arc::new(runtime), config)
    }

    fn dispatcher() -> Dispatcher {
        dispatcher_with(FrontendConfig::default())
    }

    fn send(dispatcher: &Dispatcher, text: &str) -> Option<Reply> {
        dispatcher.handle(&InboundMessage::new(
            PLAYER,
            "Knight",
            ChannelId::new("general"),
            text,
        ))
    }

    #[test]
    fn help_lists_every_command() {
        let Some(Reply::Embed(embed)) = send(&dispatcher(), "!help") else {
            panic!("help is an embed");
        };
        assert_eq!(embed.color, Color::Purple);
        assert_eq!(embed.fields.len(), 6);
        assert!(embed.fields.iter().all(|field| !field.inline));
        assert_eq!(embed.fields[1].name, "!guess <name>");
    }

    #[test]
    fn non_commands_are_ignored() {
        let dispatcher = dispatcher();
        assert_eq!(send(&dispatcher, "hi"), None);
        assert_eq!(send(&dispatcher, "!dance"), None);
    }

    #[test]
    fn win_flow() {
        let dispatcher = dispatcher();

        assert_eq!(send(&dispatcher, "!start"), Some(Reply::text(START_TEXT)));

        let Some(Reply::Embed(embed)) = send(&dispatcher, "!guess hornet") else {
            panic!("win is an embed");
        };
        assert_eq!(embed.title, "🎉 Congrats! It was **Hornet**");
        assert_eq!(embed.color, Color::Green);
        assert_eq!(embed.image.as_deref(), Some("https://img/hornet.png"));

        assert_eq!(
            send(&dispatcher, "!guess Hornet"),
            Some(Reply::text(NO_GAME_GUESS_TEXT))
        );
        assert_eq!(
            send(&dispatcher, "!stats"),
            Some(Reply::text(
                "📊 Stats for Knight:\nGames won: 1\nGames forfeited: 0\nAverage guesses per win: 1.00"
            ))
        );
    }

    #[test]
    fn wrong_guess_shows_verdicts_and_guess_image() {
        let dataset = Dataset::new(vec![
            BossRecord::builder("Hornet")
                .field(Field::Attacks, "Lunge, Throw")
                .image("https://img/hornet.png")
                .build(),
            BossRecord::builder("Nosk")
                .field(Field::Attacks, "Leap, Throw")
                .image("https://img/nosk.png")
                .build(),
        ])
        .unwrap();
        let runtime = Arc::new(GameRuntime::builder().dataset(dataset).build().unwrap());
        let dispatcher = Dispatcher::new(Arc::clone(&runtime), FrontendConfig::default());

        send(&dispatcher, "!start");
        let target = runtime.active_session(PLAYER).unwrap().unwrap().target;
        let (wrong, image) = if target.name() == "Hornet" {
            ("Nosk", "https://img/nosk.png")
        } else {
            ("Hornet", "https://img/hornet.png")
        };

        let Some(Reply::Embed(embed)) = send(&dispatcher, &format!("!guess {}", wrong.to_lowercase()))
        else {
            panic!("results are an embed");
        };
        assert_eq!(embed.title, format!("Results for **{wrong}**"));
        assert_eq!(embed.color, Color::Orange);
        assert_eq!(embed.image.as_deref(), Some(image));
        let description = embed.description.unwrap();
        assert_eq!(description.lines().count(), 7);
        assert!(description.contains("(partial)"));
    }

    #[test]
    fn unknown_boss_is_reported() {
        let dispatcher = dispatcher();
        send(&dispatcher, "!start");

        assert_eq!(
            send(&dispatcher, "!guess Radiance"),
            Some(Reply::text(UNKNOWN_BOSS_TEXT))
        );
        assert_eq!(send(&dispatcher, "!guess"), Some(Reply::text(UNKNOWN_BOSS_TEXT)));
    }

    #[test]
    fn forfeit_flow() {
        let dispatcher = dispatcher();

        assert_eq!(
            send(&dispatcher, "!ff"),
            Some(Reply::text(NO_GAME_FORFEIT_TEXT))
        );
        assert_eq!(send(&dispatcher, "!stats"), Some(Reply::text(NO_STATS_TEXT)));

        send(&dispatcher, "!start");
        assert_eq!(
            send(&dispatcher, "!ff"),
            Some(Reply::text(
                "💀 You forfeited the current game. The boss was **Hornet**."
            ))
        );
        assert_eq!(
            send(&dispatcher, "!stats"),
            Some(Reply::text(
                "📊 Stats for Knight:\nGames won: 0\nGames forfeited: 1\nAverage guesses per win: 0.00"
            ))
        );
    }

    #[test]
    fn list_is_chunked() {
        let dataset = Dataset::new(
            (1..=10)
                .map(|i| BossRecord::builder(format!("Boss {i}")).build())
                .collect(),
        )
        .unwrap();
        let runtime = GameRuntime::builder().dataset(dataset).build().unwrap();
        let dispatcher = Dispatcher::new(
            Arc::new(runtime),
            FrontendConfig {
                list_chunk_size: 4,
                ..Default::default()
            },
        );

        let Some(Reply::Embed(embed)) = send(&dispatcher, "!list") else {
            panic!("list is an embed");
        };
        assert_eq!(embed.title, "📜 List of Bosses");
        assert_eq!(embed.fields.len(), 3);
        assert!(embed.fields.iter().all(|f| f.inline && f.name == ZERO_WIDTH_SPACE));
        assert_eq!(embed.fields[2].value, "Boss 9\nBoss 10");
    }

    #[test]
    fn other_channels_are_ignored() {
        let dispatcher = dispatcher_with(FrontendConfig {
            allowed_channel: Some("bot".to_string()),
            ..Default::default()
        });

        assert_eq!(send(&dispatcher, "!help"), None);
        let reply = dispatcher.handle(&InboundMessage::new(
            PLAYER,
            "Knight",
            ChannelId::new("bot"),
            "!start",
        ));
        assert_eq!(reply, Some(Reply::text(START_TEXT)));
    }
}
