//! Mark balance invariant: X leads O by zero or one.

use super::super::{GameEngine, Mark};
use super::Invariant;
use tracing::warn;

/// Invariant: the board holds as many X's as O's, or one more X.
pub struct MarkBalanceInvariant;

impl Invariant<GameEngine> for MarkBalanceInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let x_count = engine.board().count(Mark::X);
        let o_count = engine.board().count(Mark::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Position};

    #[test]
    fn test_empty_engine_holds() {
        assert!(MarkBalanceInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_after_each_move_holds() {
        let mut engine = GameEngine::new();
        for number in [5, 1, 9, 3] {
            engine.apply_move(number).expect("legal move");
            assert!(MarkBalanceInvariant::holds(&engine));
        }
    }

    #[test]
    fn test_o_ahead_violates() {
        let mut engine = GameEngine::new();
        engine.board.set(Position::Center, Cell::Occupied(Mark::O));
        assert!(!MarkBalanceInvariant::holds(&engine));
    }
}
