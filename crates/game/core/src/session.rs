//! Per-player game session types.

use std::sync::Arc;

use crate::compare::{FieldVerdict, compare};
use crate::record::BossRecord;

/// Chat platform user identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u64);

impl core::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player's game in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub target: Arc<BossRecord>,
    pub guess_count: u32,
}

/// Result of a resolved guess.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess named the target; the session is over.
    Win {
        target: Arc<BossRecord>,
        guess_count: u32,
    },
    /// Wrong boss; verdicts explain how close it was.
    Continue {
        guessed: Arc<BossRecord>,
        verdicts: Vec<FieldVerdict>,
        guess_count: u32,
    },
}

impl GuessOutcome {
    pub const fn is_win(&self) -> bool {
        matches!(self, Self::Win { .. })
    }
}

impl Session {
    pub fn new(target: Arc<BossRecord>) -> Self {
        Self {
            target,
            guess_count: 0,
        }
    }

    /// Counts the guess and grades it against the target.
    ///
    /// The caller ends the session when this returns [`GuessOutcome::Win`].
    pub fn apply_guess(&mut self, guessed: &Arc<BossRecord>) -> GuessOutcome {
        self.guess_count += 1;

        if guessed.is_named(self.target.name()) {
            GuessOutcome::Win {
                target: Arc::clone(&self.target),
                guess_count: self.guess_count,
            }
        } else {
            GuessOutcome::Continue {
                guessed: Arc::clone(guessed),
                verdicts: compare(guessed, &self.target),
                guess_count: self.guess_count,
            }
        }
    }
}
