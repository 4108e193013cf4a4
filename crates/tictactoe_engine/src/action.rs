//! Moves and the errors that reject them.
//!
//! A rejected move never touches engine state; the error goes back to
//! the caller, which decides whether to ask again.

use super::{GameStatus, Mark, Position};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};

/// A successful move: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position)
    }
}

/// Why a requested move is not legal on the current board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMove {
    /// The requested number is not a keypad position (1-9).
    #[display("Position {} is out of range (must be 1-9)", _0)]
    OutOfRange(#[error(not(source))] i64),

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),
}

/// Error returned when the engine rejects a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum MoveError {
    /// The move itself is illegal.
    #[display("Invalid move: {}", _0)]
    #[from]
    InvalidMove(InvalidMove),

    /// The round already ended; only a reset accepts moves again.
    #[display("Game is already over ({})", _0)]
    GameOver(GameStatus),

    /// A postcondition failed after the move was applied.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::InvalidMove(reason) => Some(reason),
            MoveError::GameOver(_) | MoveError::InvariantViolation(_) => None,
        }
    }
}
