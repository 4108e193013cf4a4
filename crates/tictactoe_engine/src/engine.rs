//! The game engine: owns the board and runs the round state machine.
//!
//! ```text
//! InProgress --move, no line, board not full--> InProgress
//! InProgress --move completes a line----------> Win(mark)   [terminal]
//! InProgress --move fills board, no line------> Draw        [terminal]
//! any        --reset()------------------------> InProgress  (fresh board)
//! ```

use super::action::{InvalidMove, Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::rules;
use super::{Board, Cell, GameStatus, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// Rejected moves leave every field untouched. The engine never loops
/// or retries on its own; callers re-request input after an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) current_mark: Mark,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl GameEngine {
    /// Creates an engine with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Rebuilds an engine by applying keypad numbers in order.
    ///
    /// # Errors
    ///
    /// Returns the first rejection encountered.
    #[instrument]
    pub fn replay(positions: &[i64]) -> Result<Self, MoveError> {
        let mut engine = Self::new();
        for number in positions {
            engine.apply_move(*number)?;
        }
        Ok(engine)
    }

    /// Applies the current mark at a raw keypad number.
    ///
    /// Checks run in order: round still in progress, number within 1-9,
    /// cell empty. On success returns the status after the move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the round has ended
    /// - [`InvalidMove::OutOfRange`] for numbers outside 1-9
    /// - [`InvalidMove::CellOccupied`] when the cell already holds a mark
    #[instrument(skip(self), fields(mark = %self.current_mark))]
    pub fn apply_move(&mut self, position: i64) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            warn!(status = %self.status, "Move attempted after round ended");
            return Err(MoveError::GameOver(self.status));
        }

        let Some(pos) = Position::from_keypad(position) else {
            warn!(position, "Move out of range");
            return Err(InvalidMove::OutOfRange(position).into());
        };

        self.place(pos)
    }

    /// Applies the current mark at a typed position.
    ///
    /// # Errors
    ///
    /// Same as [`GameEngine::apply_move`], minus the range check.
    #[instrument(skip(self), fields(mark = %self.current_mark))]
    pub fn place(&mut self, position: Position) -> Result<GameStatus, MoveError> {
        if let Err(e) = MoveContract::pre(self, &position) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mark = self.current_mark;
        self.board.set(position, Cell::Occupied(mark));
        self.history.push(Move::new(mark, position));

        // The mover is judged before the turn passes.
        self.status = self.evaluate_status();
        if !self.status.is_terminal() {
            self.current_mark = mark.opponent();
        }

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, self) {
            *self = before;
            return Err(e);
        }

        match self.status {
            GameStatus::InProgress => debug!(%mark, %position, "Move applied"),
            status => info!(%mark, %position, %status, "Round finished"),
        }

        Ok(self.status)
    }

    /// Evaluates the board without changing anything.
    ///
    /// Scans all 8 lines for a winner, then checks for a full board.
    #[instrument(skip(self))]
    pub fn evaluate_status(&self) -> GameStatus {
        rules::evaluate(&self.board)
    }

    /// Starts a new round: empty board, X to move, no history.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "Resetting engine");
        *self = Self::new();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns an owned copy of the board for collaborators.
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Returns the mark to move, or the mark that ended the round.
    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    /// Returns the stored status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves of this round in play order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the empty positions while the round is in progress.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status.is_terminal() {
            Vec::new()
        } else {
            self.board.empty_positions()
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine() {
        let engine = GameEngine::new();
        assert_eq!(engine.current_mark(), Mark::X);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert!(engine.history().is_empty());
        assert_eq!(engine.valid_moves().len(), 9);
    }

    #[test]
    fn test_successful_move_toggles() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.apply_move(5), Ok(GameStatus::InProgress));
        assert_eq!(engine.board().get(Position::Center), Cell::Occupied(Mark::X));
        assert_eq!(engine.current_mark(), Mark::O);
    }

    #[test]
    fn test_out_of_range_checked_before_occupancy() {
        let mut engine = GameEngine::replay(&[5]).expect("legal move");
        assert_eq!(
            engine.apply_move(0),
            Err(MoveError::InvalidMove(InvalidMove::OutOfRange(0)))
        );
    }

    #[test]
    fn test_game_over_checked_before_range() {
        let mut engine = GameEngine::replay(&[1, 4, 2, 5, 3]).expect("legal moves");
        assert_eq!(
            engine.apply_move(42),
            Err(MoveError::GameOver(GameStatus::Win(Mark::X)))
        );
    }

    #[test]
    fn test_win_keeps_mover_current() {
        let mut engine = GameEngine::replay(&[1, 4, 2, 5]).expect("legal moves");
        assert_eq!(engine.apply_move(3), Ok(GameStatus::Win(Mark::X)));
        assert_eq!(engine.current_mark(), Mark::X);
        assert!(engine.valid_moves().is_empty());
    }

    #[test]
    fn test_evaluate_status_is_pure() {
        let engine = GameEngine::replay(&[1, 4, 2]).expect("legal moves");
        let before = engine.clone();
        assert_eq!(engine.evaluate_status(), GameStatus::InProgress);
        assert_eq!(engine, before);
    }

    #[test]
    fn test_place_typed_position() {
        let mut engine = GameEngine::new();
        engine.place(Position::BottomRight).expect("legal move");
        assert_eq!(engine.history(), &[Move::new(Mark::X, Position::BottomRight)]);
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_failed_postcondition_rolls_back() {
        let mut engine = GameEngine::new();
        engine.history.push(Move::new(Mark::X, Position::TopLeft));
        let before = engine.clone();

        assert!(matches!(
            engine.place(Position::Center),
            Err(MoveError::InvariantViolation(_))
        ));
        assert_eq!(engine, before);
        assert_eq!(engine.current_mark(), Mark::X);
        assert!(engine.board().is_empty(Position::Center));
    }

    #[test]
    fn test_replay_stops_at_first_error() {
        assert_eq!(
            GameEngine::replay(&[5, 5, 1]).unwrap_err(),
            MoveError::InvalidMove(InvalidMove::CellOccupied(Position::Center))
        );
    }
}
