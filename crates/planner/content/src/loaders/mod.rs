//! Content loaders for reading planner data from files.
//!
//! Game data arrives as JSON (one index file per catalog plus one record per
//! id); planner settings and teams are TOML.

pub mod characters;
pub mod config;
pub mod factory;
pub mod records;
pub mod team;
pub mod weapons;

pub use characters::CharacterLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use team::TeamLoader;
pub use weapons::WeaponLoader;

use std::path::Path;

use anyhow::Context;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file {}", path.display()))
}

/// Reads and parses a JSON file.
pub(crate) fn read_json<T>(path: &Path) -> LoadResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = read_file(path)?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON {}", path.display()))
}
