//! Stat calculation.
//!
//! - [`core_rank`]: which core ranks a level unlocks.
//! - [`weapon`]: weapon attack and substat at a weapon level.
//! - [`modifiers`]: core-tier properties and weapon substat effects.
//! - [`aggregate`]: the two-pass [`StatAggregator`].
//! - [`block`]: the final [`StatBlock`] and its rounding rules.
pub mod aggregate;
pub mod block;
pub mod core_rank;
pub mod modifiers;
pub mod weapon;

pub use aggregate::{BaseStats, StatAggregator};
pub use block::{Rounding, StatBlock, StatKind};
pub use core_rank::{available_core_ranks, clamp_core_rank, highest_available_core};
pub use modifiers::{CoreProperty, DeferredModifiers, SubstatEffect};
pub use weapon::{WeaponStats, WeaponStatsError, weapon_stats};
