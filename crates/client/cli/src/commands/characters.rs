//! Agent listing.

use anyhow::Result;
use clap::Parser;
use planner_core::{CharacterFilter, PlannerConfig, Rarity};

use super::{load_repository, parse_rarity};
use crate::render::print_characters;

/// List agents, optionally filtered
///
/// Repeated filters of the same kind match any of the given values.
#[derive(Parser)]
pub struct ListCharacters {
    /// Case-insensitive name search
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    search: String,

    /// Element (e.g., Ice, Fire, Electric, Ether, Physical)
    #[arg(long = "element", value_name = "ELEMENT")]
    elements: Vec<String>,

    /// Specialty (e.g., Attack, Stun, Anomaly, Support, Defense)
    #[arg(long = "specialty", value_name = "SPECIALTY")]
    specialties: Vec<String>,

    /// Faction
    #[arg(long = "faction", value_name = "FACTION")]
    factions: Vec<String>,

    /// Rarity (S or A)
    #[arg(long = "rarity", value_name = "RARITY", value_parser = parse_rarity)]
    rarities: Vec<Rarity>,
}

impl ListCharacters {
    fn filter(self) -> CharacterFilter {
        CharacterFilter {
            search: self.search,
            elements: self.elements.into_iter().collect(),
            specialties: self.specialties.into_iter().collect(),
            factions: self.factions.into_iter().collect(),
            rarities: self.rarities.into_iter().collect(),
        }
    }

    pub fn execute(self, config: &PlannerConfig) -> Result<()> {
        let repository = load_repository(config)?;
        let filter = self.filter();
        print_characters(&repository.find_characters(&filter));
        Ok(())
    }
}
