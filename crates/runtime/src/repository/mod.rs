//! In-memory stores for mutable game state.
//!
//! Each store owns its map exclusively behind an `RwLock`; callers only see
//! the operations below, never the map. Every mutation for a player runs in a
//! single write-lock critical section, so two commands from the same player
//! cannot interleave.

pub mod session;
pub mod stats;

pub use session::SessionStore;
pub use stats::StatsStore;
