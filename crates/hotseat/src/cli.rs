//! Command-line interface for hotseat.

use clap::{Parser, Subcommand};

/// Hotseat - two-player tic-tac-toe on one terminal
#[derive(Parser, Debug)]
#[command(name = "hotseat")]
#[command(about = "Two-player tic-tac-toe on one terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "hotseat.toml", global = true)]
    pub config: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Play a move list without the UI and print the result
    Replay {
        /// Comma-separated board indices (0-8) or position labels, e.g. "0,3,1,4,2"
        moves: String,
    },
}
