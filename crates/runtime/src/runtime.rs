//! High-level game façade.
//!
//! [`GameRuntime`] is the only type the command layer talks to. It resolves
//! guessed names against the dataset, drives the [`SessionStore`] and records
//! terminal outcomes in the [`StatsStore`].

use std::sync::Arc;

use game_core::{BossRecord, Dataset, GameError, GuessOutcome, PlayerId, PlayerStats, Session};

use crate::api::{Result, RuntimeError};
use crate::repository::{SessionStore, StatsStore};

/// Shared game state for every player. Wrap in `Arc` to share across tasks.
pub struct GameRuntime {
    dataset: Dataset,
    sessions: SessionStore,
    stats: StatsStore,
}

impl GameRuntime {
    /// Create a new runtime builder
    pub fn builder() -> GameRuntimeBuilder {
        GameRuntimeBuilder::new()
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Boss names in dataset order.
    pub fn boss_names(&self) -> impl Iterator<Item = &str> {
        self.dataset.names()
    }

    /// Start (or restart) a game for `player`.
    pub fn start_game(&self, player: PlayerId) -> Result<Session> {
        let session = self.sessions.start_game(player)?;
        tracing::info!(%player, "Game started");
        tracing::debug!(%player, target = session.target.name(), "Target chosen");
        Ok(session)
    }

    pub fn active_session(&self, player: PlayerId) -> Result<Option<Session>> {
        self.sessions.get_active(player)
    }

    /// Guess a boss by name.
    ///
    /// Without an active game this fails with [`GameError::NoActiveGame`]
    /// before the name is looked at. A name missing from the dataset fails
    /// with [`GameError::UnknownEntity`] and is not counted as a guess.
    pub fn guess(&self, player: PlayerId, name: &str) -> Result<GuessOutcome> {
        if self.sessions.get_active(player)?.is_none() {
            return Err(GameError::NoActiveGame.into());
        }

        let guessed = self
            .dataset
            .find_by_name(name)
            .ok_or_else(|| GameError::UnknownEntity {
                name: name.trim().to_string(),
            })?;

        let outcome = self.sessions.record_guess(player, guessed)?;
        match &outcome {
            GuessOutcome::Win {
                target,
                guess_count,
            } => {
                self.stats.record_win(player, *guess_count)?;
                tracing::info!(
                    %player,
                    target = target.name(),
                    guesses = guess_count,
                    "Game won"
                );
            }
            GuessOutcome::Continue {
                guessed,
                guess_count,
                ..
            } => {
                tracing::debug!(
                    %player,
                    guess = guessed.name(),
                    guesses = guess_count,
                    "Wrong guess"
                );
            }
        }
        Ok(outcome)
    }

    /// Give up the current game and reveal its target.
    pub fn forfeit(&self, player: PlayerId) -> Result<Arc<BossRecord>> {
        let session = self.sessions.forfeit(player)?;
        self.stats.record_forfeit(player)?;
        tracing::info!(
            %player,
            target = session.target.name(),
            guesses = session.guess_count,
            "Game forfeited"
        );
        Ok(session.target)
    }

    pub fn stats(&self, player: PlayerId) -> Result<Option<PlayerStats>> {
        self.stats.get(player)
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }
}

/// Builder for [`GameRuntime`].
#[derive(Default)]
pub struct GameRuntimeBuilder {
    dataset: Option<Dataset>,
    seed: Option<u64>,
}

impl GameRuntimeBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Set the required boss dataset
    pub fn dataset(mut self, dataset: Dataset) -> Self {
        self.dataset = Some(dataset);
        self
    }

    /// Fix the RNG seed for reproducible target selection
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<GameRuntime> {
        let dataset = self.dataset.ok_or(RuntimeError::MissingDataset)?;

        let sessions = match self.seed {
            Some(seed) => SessionStore::with_seed(dataset.clone(), seed),
            None => SessionStore::new(dataset.clone()),
        };

        Ok(GameRuntime {
            dataset,
            sessions,
            stats: StatsStore::new(),
        })
    }
}
