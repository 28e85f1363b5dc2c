//! Team file loader.
//!
//! ```toml
//! [[slot]]
//! character = "1141"
//! level = 60
//! core = 7
//! weapon = "14114"
//! weapon_level = 60
//!
//! [[slot]]
//! index = 2
//! character = "1011"
//! ```
//!
//! Slots with an `index` are placed first; the rest fill the free slots in
//! file order. Omitted levels and core ranks take the configured defaults. A
//! character may fill one slot only.

use std::path::Path;

use anyhow::{Context, bail};
use planner_core::{CoreRank, Level, PlannerConfig, Selection, Team};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeamFile {
    #[serde(default, rename = "slot")]
    pub slots: Vec<SlotEntry>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlotEntry {
    #[serde(default)]
    pub index: Option<usize>,
    pub character: String,
    #[serde(default)]
    pub level: Option<Level>,
    #[serde(default)]
    pub core: Option<CoreRank>,
    #[serde(default)]
    pub weapon: Option<String>,
    #[serde(default)]
    pub weapon_level: Option<Level>,
}

impl SlotEntry {
    fn into_selection(self, config: &PlannerConfig) -> Selection {
        let mut selection = Selection::with_config(self.character, config)
            .with_level(self.level.unwrap_or(config.default_level));
        selection.set_core_rank(self.core.unwrap_or(config.default_core_rank));
        if let Some(weapon) = self.weapon {
            selection = selection.with_weapon(
                weapon,
                self.weapon_level.unwrap_or(config.default_weapon_level),
            );
        }
        selection
    }
}

/// Loader for teams from TOML files.
pub struct TeamLoader;

impl TeamLoader {
    /// Load a team, filling omitted fields from `config`.
    ///
    /// Requested core ranks are clamped against each slot's level.
    pub fn load(path: &Path, config: &PlannerConfig) -> LoadResult<Team> {
        let content = read_file(path)?;
        Self::parse(&content, config)
            .with_context(|| format!("Failed to load team {}", path.display()))
    }

    pub fn parse(content: &str, config: &PlannerConfig) -> LoadResult<Team> {
        let file: TeamFile = toml::from_str(content).context("Failed to parse team TOML")?;
        if file.slots.len() > Team::CAPACITY {
            bail!(
                "team has {} slots, at most {} allowed",
                file.slots.len(),
                Team::CAPACITY
            );
        }

        let (explicit, implicit): (Vec<_>, Vec<_>) =
            file.slots.into_iter().partition(|entry| entry.index.is_some());

        let mut team = Team::new();
        for entry in explicit.into_iter().chain(implicit) {
            let index = match entry.index {
                Some(index) => index,
                None => (0..Team::CAPACITY)
                    .find(|index| team.get(*index).is_none())
                    .context("team has no free slot")?,
            };
            if team.get(index).is_some() {
                bail!("team slot {index} is assigned twice");
            }
            if team.iter().any(|(_, s)| s.character_id() == entry.character) {
                bail!("character {} appears in more than one slot", entry.character);
            }
            team.set(index, entry.into_selection(config))?;
        }
        Ok(team)
    }
}
