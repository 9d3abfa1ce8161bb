//! Terminal host for the tic-tac-toe engine.
//!
//! Stands in for a presentation layer: renders the board, forwards cell
//! selections to a [`tictactoe_engine::Session`], announces wins and draws
//! and asks whether to play again.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod terminal;

pub use cli::{Cli, Command, parse_moves};
pub use config::{ConfigError, HostConfig};
pub use terminal::{Announcer, Input, TerminalGame, render, replay};
