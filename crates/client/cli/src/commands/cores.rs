//! Core rank availability.

use anyhow::Result;
use clap::Parser;
use planner_core::Level;

use super::parse_level;
use crate::render::print_cores;

/// Show which core ranks a level unlocks
#[derive(Parser)]
pub struct Cores {
    /// Agent level, 1-60
    #[arg(short, long, value_name = "LEVEL", value_parser = parse_level)]
    level: Level,
}

impl Cores {
    pub fn execute(self) -> Result<()> {
        print_cores(self.level);
        Ok(())
    }
}
