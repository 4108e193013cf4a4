//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(state, action)} action {Q(before, after)}.

use super::action::{InvalidMove, MoveError};
use super::invariants::{EngineInvariants, InvariantSet};
use super::{GameEngine, Position};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the round has not ended.
pub struct RoundInProgress;

impl RoundInProgress {
    /// Rejects with `GameOver` once the status is terminal.
    #[instrument(skip(engine))]
    pub fn check(engine: &GameEngine) -> Result<(), MoveError> {
        let status = engine.status();
        if status.is_terminal() {
            Err(MoveError::GameOver(status))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects with `CellOccupied` when the cell holds a mark.
    #[instrument(skip(engine))]
    pub fn check(position: Position, engine: &GameEngine) -> Result<(), MoveError> {
        if engine.board().is_empty(position) {
            Ok(())
        } else {
            Err(InvalidMove::CellOccupied(position).into())
        }
    }
}

/// Contract for placing the current mark.
///
/// Preconditions:
/// - Round still in progress
/// - Cell must be empty
///
/// Postconditions:
/// - Exactly one more cell is occupied
/// - Every engine invariant holds
pub struct MoveContract;

impl Contract<GameEngine, Position> for MoveContract {
    fn pre(engine: &GameEngine, position: &Position) -> Result<(), MoveError> {
        RoundInProgress::check(engine)?;
        CellIsEmpty::check(*position, engine)
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), MoveError> {
        if after.history().len() != before.history().len() + 1 {
            warn!(
                before = before.history().len(),
                after = after.history().len(),
                "Move did not add exactly one history entry"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: move must record exactly one entry".to_string(),
            ));
        }

        EngineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
