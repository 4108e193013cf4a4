//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::super::{GameEngine, Mark};
use super::Invariant;

/// Invariant: marks alternate turns, X first.
///
/// While the round is in progress the current mark must be the one
/// whose turn the history implies. After a terminal move the current
/// mark stays on the player who made it.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        if let Some(first) = history.first()
            && first.mark != Mark::X
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        if engine.status().is_terminal() {
            return history.last().map(|m| m.mark) == Some(engine.current_mark());
        }

        let expected_next = if history.len() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        };
        engine.current_mark() == expected_next
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}
