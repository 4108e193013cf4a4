//! Tic-tac-toe rules engine.
//!
//! The engine owns a 3x3 board, validates moves addressed by keypad
//! number (1 = top-left, 9 = bottom-right), detects wins and draws,
//! and alternates turns between X and O.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameStatus, Mark};
//!
//! let mut engine = GameEngine::new();
//! for number in [5, 2, 1, 3] {
//!     engine.apply_move(number)?;
//! }
//! assert_eq!(engine.apply_move(9)?, GameStatus::Win(Mark::X));
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod status;
mod types;

pub use action::{InvalidMove, Move, MoveError};
pub use engine::GameEngine;
pub use position::Position;
pub use status::GameStatus;
pub use types::{Board, Cell, Mark};
