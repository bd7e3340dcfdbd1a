//! Hotseat - two-player tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use hotseat::{Cli, Command, HotseatConfig, logging};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = HotseatConfig::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            logging::init_file(&config)?;
            logging::log_config(&cli.config, &config);
            hotseat::tui::run(config)
        }
        Command::Replay { moves } => {
            logging::init_stderr();
            logging::log_config(&cli.config, &config);
            run_replay(&moves, &config)
        }
    }
}

/// Play a move list headlessly and print the result.
fn run_replay(moves: &str, config: &HotseatConfig) -> Result<()> {
    info!(moves, "Replaying moves");
    let report = hotseat::replay(moves, config)?;
    println!("{}", report);
    Ok(())
}
