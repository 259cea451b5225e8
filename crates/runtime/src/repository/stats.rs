//! Lifetime outcome counters keyed by player.

use std::collections::HashMap;
use std::sync::RwLock;

use game_core::{PlayerId, PlayerStats};

use crate::api::{Result, RuntimeError};

const STORE: &str = "stats";

/// Store of per-player statistics. Entries are created on the first finished
/// game and never removed.
#[derive(Default)]
pub struct StatsStore {
    stats: RwLock<HashMap<PlayerId, PlayerStats>>,
}

impl StatsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_win(&self, player: PlayerId, guess_count: u32) -> Result<()> {
        self.write()?
            .entry(player)
            .and_modify(|stats| stats.add_win(guess_count))
            .or_insert_with(|| PlayerStats::first_win(guess_count));
        Ok(())
    }

    pub fn record_forfeit(&self, player: PlayerId) -> Result<()> {
        self.write()?
            .entry(player)
            .and_modify(PlayerStats::add_forfeit)
            .or_insert_with(PlayerStats::first_forfeit);
        Ok(())
    }

    /// `None` means the player has not finished a game yet.
    pub fn get(&self, player: PlayerId) -> Result<Option<PlayerStats>> {
        let stats = self
            .stats
            .read()
            .map_err(|_| RuntimeError::LockPoisoned { store: STORE })?;
        Ok(stats.get(&player).copied())
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<PlayerId, PlayerStats>>> {
        self.stats
            .write()
            .map_err(|_| RuntimeError::LockPoisoned { store: STORE })
    }
}
