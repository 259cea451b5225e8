//! Cumulative per-player outcome counters.

/// Lifetime results of one player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerStats {
    pub won: u32,
    pub forfeited: u32,
    pub total_guesses_on_wins: u64,
}

impl PlayerStats {
    /// Stats of a player whose first finished game is a win.
    pub const fn first_win(guess_count: u32) -> Self {
        Self {
            won: 1,
            forfeited: 0,
            total_guesses_on_wins: guess_count as u64,
        }
    }

    /// Stats of a player whose first finished game is a forfeit.
    pub const fn first_forfeit() -> Self {
        Self {
            won: 0,
            forfeited: 1,
            total_guesses_on_wins: 0,
        }
    }

    pub fn add_win(&mut self, guess_count: u32) {
        self.won += 1;
        self.total_guesses_on_wins += u64::from(guess_count);
    }

    pub fn add_forfeit(&mut self) {
        self.forfeited += 1;
    }

    /// Mean guesses per win, `0.0` without wins.
    pub fn average_guesses(&self) -> f64 {
        if self.won == 0 {
            0.0
        } else {
            self.total_guesses_on_wins as f64 / f64::from(self.won)
        }
    }
}
