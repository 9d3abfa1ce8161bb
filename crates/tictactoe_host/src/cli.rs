//! Command-line interface for the terminal host.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the host config file (ignored if missing)
    #[arg(short, long, default_value = "tictactoe.toml", global = true)]
    pub config: PathBuf,

    /// Print snapshots as JSON instead of a grid
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play {
        /// Restart immediately after a finished game instead of asking
        #[arg(long)]
        no_prompt: bool,
    },

    /// Apply cell indices in order and print the final board
    Replay {
        /// Cell indices (0-8), separated by spaces or commas
        #[arg(required = true, num_args = 1..)]
        moves: Vec<String>,
    },
}

impl Cli {
    /// The selected command, `play` when none was given.
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Play { no_prompt: false })
    }
}

/// Splits `["0,3", "1", "4,2"]` into indices.
///
/// Tokens that are not non-negative integers are returned as the error.
pub fn parse_moves(moves: &[String]) -> Result<Vec<usize>, String> {
    moves
        .iter()
        .flat_map(|arg| arg.split(','))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<usize>().map_err(|_| token.to_string()))
        .collect()
}
