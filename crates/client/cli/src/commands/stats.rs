//! Stat panel for one agent.

use anyhow::Result;
use clap::Parser;
use planner_core::{CoreRank, Level, PlannerConfig, Selection};
use tracing::warn;

use super::{OutputFormat, load_repository, parse_core_rank, parse_level, print_json};
use crate::render::{SlotView, print_slot};

/// Show the stat panel for one agent
#[derive(Parser)]
pub struct Stats {
    /// Agent id (e.g., 1011)
    #[arg(short, long, value_name = "ID")]
    character: String,

    /// Agent level, 1-60 (defaults to the configured level)
    #[arg(short, long, value_name = "LEVEL", value_parser = parse_level)]
    level: Option<Level>,

    /// Core rank, 1 (no core) to 7 (core F); clamped to what the level unlocks
    #[arg(long, value_name = "RANK", value_parser = parse_core_rank)]
    core: Option<CoreRank>,

    /// W-Engine id to equip
    #[arg(short, long, value_name = "ID")]
    weapon: Option<String>,

    /// W-Engine level, 1-60 (defaults to the configured weapon level)
    #[arg(long, value_name = "LEVEL", value_parser = parse_level)]
    weapon_level: Option<Level>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl Stats {
    pub fn execute(self, config: &PlannerConfig) -> Result<()> {
        let repository = load_repository(config)?;

        let mut selection = Selection::with_config(self.character, config)
            .with_level(self.level.unwrap_or(config.default_level));
        let requested = self.core.unwrap_or(config.default_core_rank);
        let applied = selection.set_core_rank(requested);
        if self.core.is_some() && applied != requested {
            warn!(
                "{requested} requires level {}; using {applied}",
                requested.required_level()
            );
        }
        if let Some(weapon) = self.weapon {
            let level = self.weapon_level.unwrap_or(config.default_weapon_level);
            selection = selection.with_weapon(weapon, level);
        }

        let report = repository.planner().resolve(&selection)?;
        match self.format {
            OutputFormat::Text => print_slot(&report),
            OutputFormat::Json => print_json(&SlotView::new(None, &report))?,
        }
        Ok(())
    }
}
