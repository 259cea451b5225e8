//! Guess comparison engine.
//!
//! [`compare`] grades every [`Field`] of a guessed record against the target and
//! reports one [`FieldVerdict`] per field in [`Field::all`] order. The function
//! is pure: the same two records always yield the same verdicts.

use std::collections::HashSet;

use crate::record::{BossRecord, Field, FieldKind};

/// Canonical text for a truthy boolean field.
pub const YES: &str = "Yes";
/// Canonical text for a falsy boolean field.
pub const NO: &str = "No";

/// Where the target value lies relative to the guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Target is higher than the guess.
    Higher,
    /// Target is lower than the guess.
    Lower,
}

impl Direction {
    pub const fn reversed(self) -> Self {
        match self {
            Self::Higher => Self::Lower,
            Self::Lower => Self::Higher,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatchLevel {
    Exact,
    /// List fields sharing at least one token.
    Partial,
    /// Numeric fields that differ; carries the hint toward the target.
    Directional(Direction),
    Mismatch,
}

impl MatchLevel {
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::Exact)
    }
}

/// Outcome of comparing one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldVerdict {
    pub field: Field,
    /// Guess value as shown to the player (booleans canonicalized).
    pub display: String,
    pub level: MatchLevel,
}

/// Compares `guess` against `target`, one verdict per field.
pub fn compare(guess: &BossRecord, target: &BossRecord) -> Vec<FieldVerdict> {
    Field::all()
        .map(|field| compare_field(field, guess.get(field), target.get(field)))
        .collect()
}

fn compare_field(field: Field, guess: &str, target: &str) -> FieldVerdict {
    let kind = field.kind();

    let (display, level) = match kind {
        FieldKind::Boolean => {
            let (guess, target) = (canonical_bool(guess), canonical_bool(target));
            let level = if guess == target {
                MatchLevel::Exact
            } else {
                MatchLevel::Mismatch
            };
            (guess.to_string(), level)
        }
        _ if guess == target => (guess.to_string(), MatchLevel::Exact),
        FieldKind::Numeric => (guess.to_string(), compare_numeric(guess, target)),
        FieldKind::List => (guess.to_string(), compare_list(guess, target)),
        FieldKind::Scalar => (guess.to_string(), MatchLevel::Mismatch),
    };

    FieldVerdict {
        field,
        display,
        level,
    }
}

/// Maps `true`/`yes` in any casing to [`YES`], everything else to [`NO`].
pub fn canonical_bool(raw: &str) -> &'static str {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("true") || raw.eq_ignore_ascii_case("yes") {
        YES
    } else {
        NO
    }
}

fn compare_numeric(guess: &str, target: &str) -> MatchLevel {
    match (guess.trim().parse::<i64>(), target.trim().parse::<i64>()) {
        // Only reached when the raw strings differ, so "080" vs "80" points lower.
        (Ok(guess), Ok(target)) if guess < target => MatchLevel::Directional(Direction::Higher),
        (Ok(_), Ok(_)) => MatchLevel::Directional(Direction::Lower),
        _ => MatchLevel::Mismatch,
    }
}

fn compare_list(guess: &str, target: &str) -> MatchLevel {
    let guess = list_tokens(guess);
    if list_tokens(target).iter().any(|token| guess.contains(token)) {
        MatchLevel::Partial
    } else {
        MatchLevel::Mismatch
    }
}

/// Blank tokens are kept, so two trailing commas still overlap.
fn list_tokens(raw: &str) -> HashSet<&str> {
    raw.split(',').map(str::trim).collect()
}
