//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board. The engine and the invariants both
//! build on these, so the rules live apart from engine state.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};

use super::{Board, GameStatus};
use tracing::instrument;

/// Evaluates the status a board represents.
///
/// A completed line wins even when it also fills the board.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Win(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Mark, Position};

    #[test]
    fn test_evaluate_empty_board() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        // X O X / O X O / O X X  -- full board, X holds the main diagonal
        let mut board = Board::new();
        #[rustfmt::skip]
        let layout = [
            Mark::X, Mark::O, Mark::X,
            Mark::O, Mark::X, Mark::O,
            Mark::O, Mark::X, Mark::X,
        ];
        for (pos, mark) in Position::ALL.into_iter().zip(layout) {
            board.set(pos, Cell::Occupied(mark));
        }
        assert!(is_full(&board));
        assert_eq!(evaluate(&board), GameStatus::Win(Mark::X));
    }
}
