//! Tic-Tac-Toe terminal host.

use anyhow::{Result, anyhow};
use clap::Parser;
use std::io;
use tictactoe_host::{Cli, Command, HostConfig, TerminalGame, parse_moves, replay};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = HostConfig::load_or_default(&cli.config)?;

    // Logs go to stderr so the board on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    info!(config = %cli.config.display(), json = cli.json, "Starting tic-tac-toe host");

    match cli.command() {
        Command::Play { no_prompt } => {
            let config = if no_prompt {
                config.with_prompt_play_again(false)
            } else {
                config
            };
            let stdin = io::stdin().lock();
            let stdout = io::stdout().lock();
            TerminalGame::new(config, cli.json, stdin, stdout).run()
        }
        Command::Replay { moves } => {
            let indices =
                parse_moves(&moves).map_err(|token| anyhow!("Not a cell index: {token:?}"))?;
            replay(&indices, &config, cli.json, &mut io::stdout().lock())?;
            Ok(())
        }
    }
}
