//! Deterministic game rules shared across the bot.
//!
//! `game-core` defines the boss record schema, the [`compare`](compare::compare)
//! engine that grades a guess field by field, and the value types for sessions
//! and statistics. It holds no mutable state of its own: the runtime crate
//! owns the stores and the dataset loader lives in `game-content`.
pub mod compare;
pub mod dataset;
pub mod error;
pub mod record;
pub mod session;
pub mod stats;

pub use compare::{Direction, FieldVerdict, MatchLevel, canonical_bool, compare};
pub use dataset::Dataset;
pub use error::{DatasetError, ErrorSeverity, GameError, RecordError};
pub use record::{BossRecord, BossRecordBuilder, Field, FieldKind};
pub use session::{GuessOutcome, PlayerId, Session};
pub use stats::PlayerStats;
