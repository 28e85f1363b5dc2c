//! Command implementations.

mod characters;
mod cores;
mod stats;
mod team;
mod weapon;
mod weapons;

pub use characters::ListCharacters;
pub use cores::Cores;
pub use stats::Stats;
pub use team::TeamPanel;
pub use weapon::WeaponPanel;
pub use weapons::ListWeapons;

use anyhow::{Context, Result};
use planner_content::{ContentFactory, ContentRepository};
use planner_core::{CoreRank, Level, PlannerConfig, Rarity};

/// Output format shared by the panel commands.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Styled panel for the terminal
    #[default]
    Text,
    /// JSON for scripts
    Json,
}

/// Factory rooted at the configured data directory.
fn content_factory(config: &PlannerConfig) -> Result<ContentFactory> {
    let data_dir = config
        .data_dir
        .as_deref()
        .context("No data directory configured")?;
    Ok(ContentFactory::new(data_dir))
}

/// Loads the catalog from the configured data directory.
fn load_repository(config: &PlannerConfig) -> Result<ContentRepository> {
    let factory = content_factory(config)?;
    factory.load_repository().with_context(|| {
        format!(
            "Failed to load game data from {}",
            factory.data_dir().display()
        )
    })
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

pub(crate) fn parse_level(value: &str) -> Result<Level, String> {
    let value: u32 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a level"))?;
    Level::new(value).map_err(|e| e.to_string())
}

pub(crate) fn parse_core_rank(value: &str) -> Result<CoreRank, String> {
    let value: u32 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a core rank (1 = no core, 7 = core F)"))?;
    CoreRank::from_index(value).map_err(|e| e.to_string())
}

pub(crate) fn parse_rarity(value: &str) -> Result<Rarity, String> {
    value
        .to_ascii_uppercase()
        .parse()
        .map_err(|_| format!("'{value}' is not a rarity (S, A, or B)"))
}
