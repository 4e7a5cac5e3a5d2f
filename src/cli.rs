//! Command-line interface for tactoe.

use clap::{Parser, Subcommand};

/// Tactoe - drive the tic-tac-toe engine from the terminal
#[derive(Parser, Debug)]
#[command(name = "tactoe")]
#[command(about = "Play, replay, and simulate tic-tac-toe games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play random-vs-random games and report the outcomes
    Simulate {
        /// Number of games (overrides config)
        #[arg(short, long)]
        games: Option<u32>,

        /// Random seed (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play a sequence of board indices (0-8) and show the result
    Replay {
        /// Board indices in play order
        #[arg(required = true)]
        indices: Vec<usize>,
    },

    /// Play as X against a random O
    Play {
        /// Random seed for O's moves (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,
    },
}
