//! Level gating for core ranks.
//!
//! A rank is selectable once the character level reaches its
//! [`CoreRank::required_level`]. Requirements are non-decreasing by rank, so
//! the selectable set only grows as the level rises.

use arrayvec::ArrayVec;

use crate::model::{CoreRank, Level};

/// The highest core rank selectable at `level`. [`CoreRank::None`] is always available.
pub fn highest_available_core(level: Level) -> CoreRank {
    CoreRank::ALL
        .iter()
        .rev()
        .copied()
        .find(|rank| rank.is_available_at(level))
        .unwrap_or(CoreRank::None)
}

/// Clamps a requested rank down to what `level` allows.
pub fn clamp_core_rank(requested: CoreRank, level: Level) -> CoreRank {
    requested.min(highest_available_core(level))
}

/// Every rank selectable at `level`, ascending.
pub fn available_core_ranks(level: Level) -> ArrayVec<CoreRank, { CoreRank::ALL.len() }> {
    CoreRank::ALL
        .into_iter()
        .filter(|rank| rank.is_available_at(level))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(value: u32) -> Level {
        Level::saturating(value)
    }

    #[test]
    fn thresholds() {
        assert_eq!(highest_available_core(level(1)), CoreRank::None);
        assert_eq!(highest_available_core(level(14)), CoreRank::None);
        assert_eq!(highest_available_core(level(15)), CoreRank::A);
        assert_eq!(highest_available_core(level(34)), CoreRank::B);
        assert_eq!(highest_available_core(level(35)), CoreRank::C);
        assert_eq!(highest_available_core(level(55)), CoreRank::E);
        assert_eq!(highest_available_core(level(59)), CoreRank::E);
        assert_eq!(highest_available_core(level(60)), CoreRank::F);
    }

    #[test]
    fn highest_available_is_monotonic_in_level() {
        let ranks: Vec<_> = Level::all().map(highest_available_core).collect();
        assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn clamp_never_exceeds_availability() {
        for lvl in Level::all() {
            for rank in CoreRank::ALL {
                let clamped = clamp_core_rank(rank, lvl);
                assert!(clamped <= highest_available_core(lvl));
                assert!(clamped <= rank);
            }
        }
    }

    #[test]
    fn clamp_keeps_allowed_requests() {
        assert_eq!(clamp_core_rank(CoreRank::B, level(60)), CoreRank::B);
        assert_eq!(clamp_core_rank(CoreRank::F, level(40)), CoreRank::C);
    }

    #[test]
    fn available_ranks_at_level_25() {
        let ranks = available_core_ranks(level(25));
        assert_eq!(ranks.as_slice(), &[CoreRank::None, CoreRank::A, CoreRank::B]);
        assert_eq!(available_core_ranks(level(60)).len(), CoreRank::ALL.len());
    }
}
