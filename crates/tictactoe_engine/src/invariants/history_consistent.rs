//! History consistency invariant: the move log explains the board.

use super::super::{Cell, GameEngine};
use super::Invariant;

/// Invariant: every occupied cell comes from exactly one recorded move.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        let history = engine.history();

        let filled = board.cells().iter().filter(|c| **c != Cell::Empty).count();
        filled == history.len()
            && history
                .iter()
                .all(|m| board.get(m.position) == Cell::Occupied(m.mark))
    }

    fn description() -> &'static str {
        "Move history is consistent with the board"
    }
}
