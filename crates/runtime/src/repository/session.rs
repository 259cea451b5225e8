//! Active game sessions keyed by player.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use game_core::{BossRecord, Dataset, GameError, GuessOutcome, PlayerId, Session};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::api::{Result, RuntimeError};

const STORE: &str = "session";

/// Store of in-progress games, at most one per player.
pub struct SessionStore {
    dataset: Dataset,
    rng: Mutex<StdRng>,
    sessions: RwLock<HashMap<PlayerId, Session>>,
}

impl SessionStore {
    /// Create a store drawing targets from `dataset` with OS entropy.
    pub fn new(dataset: Dataset) -> Self {
        Self::with_rng(dataset, StdRng::from_os_rng())
    }

    /// Create a store whose target sequence is fixed by `seed`.
    pub fn with_seed(dataset: Dataset, seed: u64) -> Self {
        Self::with_rng(dataset, StdRng::seed_from_u64(seed))
    }

    fn with_rng(dataset: Dataset, rng: StdRng) -> Self {
        Self {
            dataset,
            rng: Mutex::new(rng),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Start a game against a uniformly random boss.
    ///
    /// An existing session for the player is replaced.
    pub fn start_game(&self, player: PlayerId) -> Result<Session> {
        let target = self.pick_target()?;
        let session = Session::new(target);

        let mut sessions = self.write()?;
        if let Some(previous) = sessions.insert(player, session.clone()) {
            tracing::debug!(
                %player,
                discarded = previous.target.name(),
                guesses = previous.guess_count,
                "Replaced active session"
            );
        }
        Ok(session)
    }

    /// Snapshot of the player's session, if any.
    pub fn get_active(&self, player: PlayerId) -> Result<Option<Session>> {
        Ok(self.read()?.get(&player).cloned())
    }

    /// Count a resolved guess and grade it.
    ///
    /// A winning guess removes the session in the same critical section, so
    /// a concurrent guess for the same player sees [`GameError::NoActiveGame`].
    pub fn record_guess(
        &self,
        player: PlayerId,
        guessed: &Arc<BossRecord>,
    ) -> Result<GuessOutcome> {
        let mut sessions = self.write()?;
        let session = sessions
            .get_mut(&player)
            .ok_or(GameError::NoActiveGame)?;

        let outcome = session.apply_guess(guessed);
        if outcome.is_win() {
            sessions.remove(&player);
        }
        Ok(outcome)
    }

    /// End the player's game and hand back its session.
    pub fn forfeit(&self, player: PlayerId) -> Result<Session> {
        self.write()?
            .remove(&player)
            .ok_or_else(|| GameError::NoActiveGame.into())
    }

    /// Number of games in progress.
    pub fn active_count(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    fn pick_target(&self) -> Result<Arc<BossRecord>> {
        let index = self
            .rng
            .lock()
            .map_err(|_| RuntimeError::LockPoisoned { store: STORE })?
            .random_range(0..self.dataset.len());

        self.dataset
            .get(index)
            .cloned()
            .ok_or(RuntimeError::MissingDataset)
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, HashMap<PlayerId, Session>>> {
        self.sessions
            .read()
            .map_err(|_| RuntimeError::LockPoisoned { store: STORE })
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<PlayerId, Session>>> {
        self.sessions
            .write()
            .map_err(|_| RuntimeError::LockPoisoned { store: STORE })
    }
}
