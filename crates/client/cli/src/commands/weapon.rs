//! W-Engine panel.

use anyhow::Result;
use clap::Parser;
use planner_core::{Level, PlannerConfig};

use super::{load_repository, parse_level};
use crate::render::print_weapon;

/// Show a W-Engine's attack and substat at a level
#[derive(Parser)]
pub struct WeaponPanel {
    /// W-Engine id (e.g., 14114)
    #[arg(value_name = "ID")]
    id: String,

    /// W-Engine level, 1-60 (defaults to the configured weapon level)
    #[arg(short, long, value_name = "LEVEL", value_parser = parse_level)]
    level: Option<Level>,
}

impl WeaponPanel {
    pub fn execute(self, config: &PlannerConfig) -> Result<()> {
        let repository = load_repository(config)?;
        let level = self.level.unwrap_or(config.default_weapon_level);

        let (weapon, stats) = repository.planner().weapon_panel(&self.id, level)?;
        print_weapon(weapon, level, stats.as_ref());
        Ok(())
    }
}
