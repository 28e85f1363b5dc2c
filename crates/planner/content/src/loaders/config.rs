//! Planner configuration loader.

use std::path::Path;

use anyhow::Context;
use planner_core::PlannerConfig;
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Loader for planner configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    pub const FILE_NAME: &'static str = "planner.toml";

    /// Load config data from a TOML file.
    ///
    /// Fields missing from the file keep their defaults.
    pub fn load(path: &Path) -> LoadResult<PlannerConfig> {
        let content = read_file(path)?;
        let config: PlannerConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config TOML {}", path.display()))?;

        Ok(config)
    }

    /// Like [`ConfigLoader::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> LoadResult<PlannerConfig> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(PlannerConfig::default())
        }
    }
}
