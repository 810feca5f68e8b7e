//! Skirmish command-line client.
//!
//! Usage:
//!   skirmish train [--episodes N] [--max-turns N]
//!   skirmish play [--epsilon E] [--board] [--save]
//!   skirmish inspect [--format summary|json] [--top N]

mod commands;
mod config;
mod dirs;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{InspectCommand, PlayCommand, TrainCommand};
use config::ClientConfig;

#[derive(Parser)]
#[command(name = "skirmish", version, about = "Grid skirmish with a self-taught Q-learning agent")]
struct Cli {
    /// TOML file with rule, learning and training settings
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Value table path (overrides SKIRMISH_TABLE)
    #[arg(long, global = true)]
    table: Option<PathBuf>,

    /// RNG seed (overrides SKIRMISH_SEED)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Train the agent with self-play and save the value table
    Train(TrainCommand),

    /// Play one match with the learned table
    Play(PlayCommand),

    /// Show statistics about a saved value table
    Inspect(InspectCommand),
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = ClientConfig::load(cli.config.as_deref())?;
    if let Some(table) = cli.table {
        config.table_path = table;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    match cli.command {
        Command::Train(cmd) => cmd.execute(&config),
        Command::Play(cmd) => cmd.execute(&config),
        Command::Inspect(cmd) => cmd.execute(&config),
    }
}
