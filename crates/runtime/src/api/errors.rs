//! Unified error types surfaced by the runtime API.
//!
//! Wraps player-facing game errors and store failures so the dispatcher can
//! tell "tell the player" apart from "something is broken".
use game_core::GameError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("{store} store lock was poisoned")]
    LockPoisoned { store: &'static str },

    #[error("runtime requires a dataset before building")]
    MissingDataset,
}

impl RuntimeError {
    /// The player-facing error, if this is one.
    pub fn as_game_error(&self) -> Option<&GameError> {
        match self {
            Self::Game(err) => Some(err),
            _ => None,
        }
    }
}
