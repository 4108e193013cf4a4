//! Error types for the console shell.

use derive_more::{Display, Error, From};
use tictactoe_engine::MoveError;
use tracing::instrument;

/// Failure to obtain input from the player.
#[derive(Debug, Display, Error, From)]
pub enum InputError {
    /// The player typed something that is not a number.
    #[display("Malformed input: {:?}", _0)]
    Malformed(#[error(not(source))] String),

    /// Input closed before an answer arrived.
    #[display("End of input")]
    EndOfInput,

    /// Reading or writing the console failed.
    #[display("Console I/O error: {}", _0)]
    #[from]
    Io(std::io::Error),
}

/// A move request that did not produce a move.
///
/// Malformed input and engine rejections get the same treatment:
/// show a message, ask again.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum RejectedMove {
    /// Input could not be read as a number.
    #[display("Malformed input: {:?}", _0)]
    Malformed(#[error(not(source))] String),

    /// The engine refused the move.
    #[display("{}", _0)]
    #[from]
    Engine(MoveError),
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
