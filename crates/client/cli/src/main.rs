//! Command-line front-end for the agent stat planner.
//!
//! Run with: `planner <command>`

mod commands;
mod config;
mod dirs;
mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Cores, ListCharacters, ListWeapons, Stats, TeamPanel, WeaponPanel};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Stat planner for agents, W-Engines, and cores
#[derive(Parser)]
#[command(name = "planner")]
#[command(about = "Computes agent stats for a level, core rank, and W-Engine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

/// Options shared by every command.
#[derive(clap::Args)]
pub struct GlobalArgs {
    /// Game data directory (defaults to PLANNER_DATA_DIR, then the platform data directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Planner configuration file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also write logs to a daily rolling file in this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Show the stat panel for one agent
    Stats(Stats),

    /// Show a W-Engine's attack and substat at a level
    Weapon(WeaponPanel),

    /// List agents, optionally filtered
    Characters(ListCharacters),

    /// List W-Engines sorted by rarity, optionally filtered
    Weapons(ListWeapons),

    /// Show the stat panels for a team file
    Team(TeamPanel),

    /// Show which core ranks a level unlocks
    Cores(Cores),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for PLANNER_DATA_DIR and other env vars)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = config::resolve(&cli.global)?;

    let _guard = setup_logging(config.log_dir.as_deref())?;

    match cli.command {
        Command::Stats(cmd) => cmd.execute(&config),
        Command::Weapon(cmd) => cmd.execute(&config),
        Command::Characters(cmd) => cmd.execute(&config),
        Command::Weapons(cmd) => cmd.execute(&config),
        Command::Team(cmd) => cmd.execute(&config),
        Command::Cores(cmd) => cmd.execute(),
    }
}

/// Setup logging to stderr, and to a daily rolling file when `log_dir` is set.
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// whole program.
fn setup_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "planner.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = log_dir {
        tracing::debug!("Log file: {}/planner.log", dir.display());
    }

    Ok(guard)
}
