//! W-Engine listing.

use anyhow::Result;
use clap::Parser;
use planner_core::{PlannerConfig, Rarity, WeaponFilter};

use super::{load_repository, parse_rarity};
use crate::render::print_weapons;

/// List W-Engines sorted by rarity, optionally filtered
#[derive(Parser)]
pub struct ListWeapons {
    /// Case-insensitive name search
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    search: String,

    /// Rarity (S, A, or B)
    #[arg(long = "rarity", value_name = "RARITY", value_parser = parse_rarity)]
    rarities: Vec<Rarity>,

    /// W-Engine type (e.g., Attack, Stun)
    #[arg(long = "type", value_name = "TYPE")]
    types: Vec<String>,
}

impl ListWeapons {
    pub fn execute(self, config: &PlannerConfig) -> Result<()> {
        let repository = load_repository(config)?;
        let filter = WeaponFilter {
            search: self.search,
            rarities: self.rarities.into_iter().collect(),
            types: self.types.into_iter().collect(),
        };
        print_weapons(&repository.find_weapons(&filter));
        Ok(())
    }
}
