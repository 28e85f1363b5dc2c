//! Platform-specific directory utilities
//!
//! Follows platform conventions for data and config directories:
//! - macOS: `~/Library/Application Support/agent-planner`
//! - Linux: `~/.local/share/agent-planner`, `~/.config/agent-planner`
//! - Windows: `%APPDATA%\agent-planner`

use std::path::PathBuf;

use directories::ProjectDirs;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "agent-planner")
}

/// Default game data directory. Fallback: `./data`.
pub fn data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./data"))
}

/// Default planner configuration file. Fallback: `./planner.toml`.
pub fn config_file() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.config_dir().join("planner.toml"))
        .unwrap_or_else(|| PathBuf::from("planner.toml"))
}
