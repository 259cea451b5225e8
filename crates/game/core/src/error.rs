//! Error types for game-core.
//!
//! Two families live here:
//! - [`GameError`]: player-facing outcomes of a command that leave state untouched
//! - [`RecordError`] / [`DatasetError`]: load-time validation, fatal at startup

/// Severity level of an error, used for logging and reply strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Invalid player input; reported back, never retried.
    ///
    /// Examples: guessing without a game, unknown boss name
    Validation,

    /// Unrecoverable configuration problem; the process must not continue.
    ///
    /// Examples: empty dataset
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }
}

/// Errors a player command can run into.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("no active game")]
    NoActiveGame,

    #[error("unknown boss `{name}`")]
    UnknownEntity { name: String },
}

impl GameError {
    pub const fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    /// Stable identifier for logs and tests.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NoActiveGame => "no_active_game",
            Self::UnknownEntity { .. } => "unknown_entity",
        }
    }
}

/// A dataset row could not be turned into a record.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("record has no `Name`")]
    MissingName,
}

/// The dataset as a whole is unusable.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    #[error("dataset contains no records")]
    Empty,
}

impl DatasetError {
    pub const fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }
}
