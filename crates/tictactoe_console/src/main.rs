//! Tic-tac-toe console game.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::io;
use tictactoe_console::{ConsoleConfig, ConsoleInput, ConsolePresenter, Session};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ConsoleConfig::from_file(path)?,
        None => ConsoleConfig::default(),
    }
    .with_glyph_overrides(cli.x_glyph, cli.o_glyph)?;

    initialize_tracing(config.log_filter());

    run(&config)
}

/// Play rounds on stdin/stdout until the players stop.
#[instrument(skip(config))]
fn run(config: &ConsoleConfig) -> Result<()> {
    info!("Starting tic-tac-toe session");

    let input = ConsoleInput::new(io::stdin().lock(), io::stdout(), config.glyphs());
    let presenter = ConsolePresenter::new(io::stdout(), config.glyphs());

    let summary = Session::new(input, presenter).run()?;
    info!(
        rounds = summary.rounds,
        x_wins = summary.x_wins,
        o_wins = summary.o_wins,
        draws = summary.draws,
        "Session complete"
    );
    Ok(())
}

/// Logs go to stderr so they never interleave with the board.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}
