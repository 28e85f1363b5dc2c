//! Deterministic stat calculation for the agent planner.
//!
//! `planner-core` turns a selection of {character, level, core rank, weapon,
//! weapon level} into the stat block shown on the character panel. Every
//! function here is pure: the same inputs always produce the same block, and
//! nothing is read from disk or the network. Data arrives through the
//! read-only oracles in [`env`], which `planner-content` implements.
//!
//! The entry point is [`stats::StatAggregator`]; front-ends usually go through
//! [`Planner`], which resolves a [`Selection`] against the oracles first.
pub mod catalog;
pub mod config;
pub mod env;
pub mod error;
pub mod format;
pub mod model;
pub mod planner;
pub mod selection;
pub mod stats;

pub use catalog::{CharacterFilter, WeaponFilter};
pub use config::PlannerConfig;
pub use env::{CatalogSnapshot, CharacterOracle, Env, OracleError, PlannerEnv, WeaponOracle};
pub use error::{CoreRankError, LevelError, SelectionError};
pub use format::{format_stat, stat_suffix};
pub use model::{
    AscensionTier, Character, CharacterBaseStats, CoreRank, ExtraAscensionTier, LevelRate, Level,
    Property, Rarity, StarRate, Weapon, WeaponBaseProperty, WeaponRandProperty,
};
pub use planner::{Planner, SlotReport, TeamReport};
pub use selection::{Selection, Team, WeaponSelection};
pub use stats::{
    BaseStats, CoreProperty, DeferredModifiers, Rounding, StatAggregator, StatBlock, StatKind,
    SubstatEffect, WeaponStats, WeaponStatsError, available_core_ranks, clamp_core_rank,
    highest_available_core, weapon_stats,
};
