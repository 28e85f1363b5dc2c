//! Planner configuration resolution.
//!
//! Precedence, lowest first: built-in defaults, the TOML config file,
//! environment variables, command-line flags.

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use planner_content::ConfigLoader;
use planner_core::PlannerConfig;

use crate::GlobalArgs;
use crate::dirs;

/// Game data directory.
pub const ENV_DATA_DIR: &str = "PLANNER_DATA_DIR";
/// Directory for rolling log files.
pub const ENV_LOG_DIR: &str = "PLANNER_LOG_DIR";
/// Configuration file path.
pub const ENV_CONFIG: &str = "PLANNER_CONFIG";

/// Builds the effective configuration for this run.
///
/// An explicitly named config file must exist; the default location may be
/// absent. The returned config always has a data directory.
pub fn resolve(args: &GlobalArgs) -> Result<PlannerConfig> {
    let mut config = match args.config.clone().or_else(|| read_env(ENV_CONFIG)) {
        Some(path) => ConfigLoader::load(&path)?,
        None => ConfigLoader::load_or_default(&dirs::config_file())?,
    };

    apply_env(&mut config, read_env::<PathBuf>);
    apply_args(&mut config, args);

    if config.data_dir.is_none() {
        config.data_dir = Some(dirs::data_dir());
    }
    Ok(config)
}

/// Applies environment overrides, reading variables through `lookup`.
fn apply_env(config: &mut PlannerConfig, lookup: impl Fn(&str) -> Option<PathBuf>) {
    if let Some(dir) = lookup(ENV_DATA_DIR) {
        config.data_dir = Some(dir);
    }
    if let Some(dir) = lookup(ENV_LOG_DIR) {
        config.log_dir = Some(dir);
    }
}

fn apply_args(config: &mut PlannerConfig, args: &GlobalArgs) {
    if let Some(dir) = &args.data_dir {
        config.data_dir = Some(dir.clone());
    }
    if let Some(dir) = &args.log_dir {
        config.log_dir = Some(dir.clone());
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let value = env::var(key).ok()?;
    if value.is_empty() {
        return None;
    }
    value.parse().ok()
}
