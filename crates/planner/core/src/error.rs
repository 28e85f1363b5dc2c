//! Error types for planner-core.
//!
//! The calculation itself never fails: missing optional data only removes the
//! bonus it would have contributed. Errors exist at the edges, where raw input
//! (integers from a UI, ids from a file) becomes a typed value.
//!
//! Weapon table failures live with the formula in
//! [`crate::stats::WeaponStatsError`].

use crate::env::OracleError;
use crate::model::Level;

/// A character or weapon level outside the playable range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("level {value} is outside {min}..={max}", min = Level::MIN.get(), max = Level::MAX.get())]
pub struct LevelError {
    pub value: u32,
}

/// An integer that does not name a core rank (valid ranks are 1..=7).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("core rank {value} is outside 1..=7")]
pub struct CoreRankError {
    pub value: u32,
}

/// Errors raised while resolving a [`crate::Selection`] against the data oracles.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("unknown character id '{0}'")]
    UnknownCharacter(String),

    #[error("unknown weapon id '{0}'")]
    UnknownWeapon(String),

    #[error("team slot {index} is out of range (capacity {capacity})")]
    SlotOutOfRange { index: usize, capacity: usize },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl SelectionError {
    /// Returns a static identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCharacter(_) => "unknown_character",
            Self::UnknownWeapon(_) => "unknown_weapon",
            Self::SlotOutOfRange { .. } => "slot_out_of_range",
            Self::Oracle(_) => "oracle_unavailable",
        }
    }
}
