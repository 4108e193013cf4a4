//! Command-line interface for the tictactoe binary.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on a numbered 3x3 board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Character drawn for X (overrides the config file)
    #[arg(long)]
    pub x_glyph: Option<char>,

    /// Character drawn for O (overrides the config file)
    #[arg(long)]
    pub o_glyph: Option<char>,
}
