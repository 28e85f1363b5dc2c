//! Stat panels for a whole team.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use planner_core::PlannerConfig;

use super::{OutputFormat, content_factory, print_json};
use crate::render::{SlotView, print_slot};

/// Show the stat panels for a team file
#[derive(Parser)]
pub struct TeamPanel {
    /// Team file (TOML, up to three [[slot]] tables)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl TeamPanel {
    pub fn execute(self, config: &PlannerConfig) -> Result<()> {
        let factory = content_factory(config)?;
        let team = factory.load_team(&self.file, config)?;
        let repository = factory.load_repository()?;
        let reports = repository.planner().resolve_team(&team)?;

        match self.format {
            OutputFormat::Text => {
                if reports.is_empty() {
                    println!("{}", style("Team is empty").dim());
                }
                for (index, report) in &reports {
                    println!("{}", style(format!("── Slot {} ──", index + 1)).bold());
                    print_slot(report);
                    println!();
                }
            }
            OutputFormat::Json => {
                let views: Vec<_> = reports
                    .iter()
                    .map(|(index, report)| SlotView::new(Some(*index), report))
                    .collect();
                print_json(&views)?;
            }
        }
        Ok(())
    }
}
