//! Data model for characters, weapons, and the selections applied to them.
//!
//! These types are the "already validated" shapes the aggregator consumes.
//! Raw data-file records are converted into them by `planner-content`.
mod character;
mod core_rank;
mod level;
mod rarity;
mod weapon;

pub use character::{AscensionTier, Character, CharacterBaseStats, ExtraAscensionTier, Property};
pub use core_rank::CoreRank;
pub use level::Level;
pub use rarity::Rarity;
pub use weapon::{LevelRate, StarRate, Weapon, WeaponBaseProperty, WeaponRandProperty};

/// Divisor for values stored in ten-thousandths (growth and rate tables).
pub const RATE_SCALE: f64 = 10_000.0;

/// Divisor for values stored in hundredths (crit, pen ratio, substats).
pub const PERCENT_SCALE: f64 = 100.0;
