use std::path::PathBuf;

use crate::model::{CoreRank, Level};

/// Planner configuration constants and user-tunable defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Game data directory. `None` lets the front-end pick its platform default.
    pub data_dir: Option<PathBuf>,
    /// Character level a new selection starts at.
    pub default_level: Level,
    /// Core rank a new selection requests; clamped against the level.
    pub default_core_rank: CoreRank,
    /// Weapon level a newly equipped weapon starts at.
    pub default_weapon_level: Level,
    /// Directory for rolling log files. Logs go to stderr only when unset.
    pub log_dir: Option<PathBuf>,
}

impl PlannerConfig {
    // ===== compile-time constants =====
    /// Characters in a team.
    pub const MAX_TEAM_SLOTS: usize = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_LEVEL: Level = Level::MAX;
    pub const DEFAULT_CORE_RANK: CoreRank = CoreRank::F;
    pub const DEFAULT_WEAPON_LEVEL: Level = Level::MAX;

    pub fn new() -> Self {
        Self {
            data_dir: None,
            default_level: Self::DEFAULT_LEVEL,
            default_core_rank: Self::DEFAULT_CORE_RANK,
            default_weapon_level: Self::DEFAULT_WEAPON_LEVEL,
            log_dir: None,
        }
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(data_dir.into());
        self
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new()
    }
}
