//! The round and replay loop tying input, engine and presenter together.

use crate::error::{InputError, RejectedMove};
use crate::input::{InputProvider, PlayerSlot, ReplayAnswer};
use crate::presenter::Presenter;
use anyhow::Result;
use tictactoe_engine::{GameEngine, GameStatus, Mark};
use tracing::{debug, info, instrument};

/// Tally of finished rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rounds played to a result.
    pub rounds: usize,
    /// Rounds won by X (player 1).
    pub x_wins: usize,
    /// Rounds won by O (player 2).
    pub o_wins: usize,
    /// Drawn rounds.
    pub draws: usize,
}

impl SessionSummary {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Win(Mark::X) => self.x_wins += 1,
            GameStatus::Win(Mark::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => return,
        }
        self.rounds += 1;
    }
}

/// Console session: one engine, reset at the start of every round.
pub struct Session<I, P> {
    engine: GameEngine,
    input: I,
    presenter: P,
    summary: SessionSummary,
}

impl<I: InputProvider, P: Presenter> Session<I, P> {
    /// Creates a session over the given collaborators.
    pub fn new(input: I, presenter: P) -> Self {
        Self {
            engine: GameEngine::new(),
            input,
            presenter,
            summary: SessionSummary::default(),
        }
    }

    /// Returns the collaborators.
    pub fn into_parts(self) -> (I, P) {
        (self.input, self.presenter)
    }

    /// Plays rounds until the players stop or input runs out.
    ///
    /// # Errors
    ///
    /// Only console I/O failures end the session with an error; bad
    /// moves and malformed input are re-prompted.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<SessionSummary> {
        self.presenter.render_title()?;

        loop {
            if self.play_round()?.is_none() {
                break;
            }

            match self.input.request_replay() {
                Ok(ReplayAnswer::Again) => debug!("Starting another round"),
                Ok(ReplayAnswer::Quit) => {
                    self.presenter.render_farewell()?;
                    break;
                }
                Ok(ReplayAnswer::Invalid(answer)) => {
                    self.presenter.render_invalid_replay(&answer)?;
                    break;
                }
                Err(InputError::EndOfInput) => break,
                Err(e) => return Err(e.into()),
            }
        }

        info!(summary = ?self.summary, "Session ended");
        Ok(self.summary)
    }

    /// Plays one round. Returns `None` if input closed first.
    #[instrument(skip(self))]
    fn play_round(&mut self) -> Result<Option<GameStatus>> {
        let Some(player_x) = self.read_name(PlayerSlot::First)? else {
            return Ok(None);
        };
        let Some(player_o) = self.read_name(PlayerSlot::Second)? else {
            return Ok(None);
        };
        self.presenter.render_turn_order(&player_x, &player_o)?;
        self.engine.reset();

        let mut updated = false;
        loop {
            self.presenter.render(self.engine.board(), updated)?;

            let mover = match self.engine.current_mark() {
                Mark::X => player_x.as_str(),
                Mark::O => player_o.as_str(),
            };
            let Some(status) = self.next_move(mover)? else {
                return Ok(None);
            };
            updated = true;

            if status.is_terminal() {
                self.presenter.render(self.engine.board(), updated)?;
                self.presenter.render_result(status, &player_x, &player_o)?;
                self.summary.record(status);
                info!(%status, moves = self.engine.history().len(), "Round finished");
                return Ok(Some(status));
            }
        }
    }

    /// Requests moves until the engine accepts one.
    fn next_move(&mut self, player_name: &str) -> Result<Option<GameStatus>> {
        loop {
            let mark = self.engine.current_mark();
            let rejection = match self.input.request_move(mark, player_name) {
                Ok(position) => match self.engine.apply_move(position) {
                    Ok(status) => return Ok(Some(status)),
                    Err(e) => RejectedMove::from(e),
                },
                Err(InputError::Malformed(token)) => RejectedMove::Malformed(token),
                Err(InputError::EndOfInput) => return Ok(None),
                Err(e) => return Err(e.into()),
            };
            debug!(%rejection, "Re-prompting");
            self.presenter.render_rejection(&rejection)?;
        }
    }

    fn read_name(&mut self, slot: PlayerSlot) -> Result<Option<String>> {
        match self.input.request_name(slot) {
            Ok(name) => Ok(Some(name)),
            Err(InputError::EndOfInput) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Glyphs;
    use crate::presenter::ConsolePresenter;
    use std::collections::VecDeque;

    /// Scripted input: names, then raw move tokens, then replay answers.
    #[derive(Default)]
    struct Script {
        names: VecDeque<&'static str>,
        moves: VecDeque<&'static str>,
        replies: VecDeque<&'static str>,
        move_requests: usize,
    }

    impl InputProvider for Script {
        fn request_name(&mut self, _slot: PlayerSlot) -> Result<String, InputError> {
            self.names
                .pop_front()
                .map(str::to_string)
                .ok_or(InputError::EndOfInput)
        }

        fn request_move(&mut self, _mark: Mark, _player_name: &str) -> Result<i64, InputError> {
            self.move_requests += 1;
            let token = self.moves.pop_front().ok_or(InputError::EndOfInput)?;
            token
                .parse()
                .map_err(|_| InputError::Malformed(token.to_string()))
        }

        fn request_replay(&mut self) -> Result<ReplayAnswer, InputError> {
            Ok(match self.replies.pop_front().ok_or(InputError::EndOfInput)? {
                "Y" => ReplayAnswer::Again,
                "N" => ReplayAnswer::Quit,
                other => ReplayAnswer::Invalid(other.to_string()),
            })
        }
    }

    fn run(script: Script) -> (SessionSummary, Script, String) {
        let presenter = ConsolePresenter::new(Vec::new(), Glyphs::default());
        let mut session = Session::new(script, presenter);
        let summary = session.run().expect("session runs");
        let (script, presenter) = session.into_parts();
        let out = String::from_utf8(presenter.into_inner()).expect("utf8 output");
        (summary, script, out)
    }

    #[test]
    fn test_single_round_then_quit() {
        let script = Script {
            names: ["Ada", "Bob"].into(),
            moves: ["5", "2", "1", "3", "9"].into(),
            replies: ["N"].into(),
            ..Default::default()
        };
        let (summary, _, out) = run(script);
        assert_eq!(summary, SessionSummary { rounds: 1, x_wins: 1, o_wins: 0, draws: 0 });
        assert!(out.contains("Ada CONGRATS!! you win"));
        assert!(out.contains("THANK YOU"));
    }

    #[test]
    fn test_rejections_are_reprompted() {
        let script = Script {
            names: ["Ada", "Bob"].into(),
            moves: ["5", "five", "10", "5", "2", "1", "3", "9"].into(),
            replies: ["N"].into(),
            ..Default::default()
        };
        let (summary, script, out) = run(script);
        assert_eq!(summary.x_wins, 1);
        assert_eq!(script.move_requests, 8);
        assert_eq!(out.matches("Invalid !!!").count(), 2);
        assert_eq!(out.matches("There is no empty space").count(), 1);
    }

    #[test]
    fn test_replay_resets_board() {
        let script = Script {
            names: ["Ada", "Bob", "Cy", "Di"].into(),
            moves: ["5", "2", "1", "3", "9", "1", "5", "3", "2", "4", "6", "8", "7", "9"].into(),
            replies: ["Y", "N"].into(),
            ..Default::default()
        };
        let (summary, _, out) = run(script);
        assert_eq!(summary, SessionSummary { rounds: 2, x_wins: 1, o_wins: 0, draws: 1 });
        assert!(out.contains("Cy First turn [X]"));
        assert!(out.contains("DRAW!"));
    }

    #[test]
    fn test_invalid_replay_answer_ends_session() {
        let script = Script {
            names: ["Ada", "Bob", "Cy", "Di"].into(),
            moves: ["1", "4", "2", "5", "7", "6"].into(),
            replies: ["yes"].into(),
            ..Default::default()
        };
        let (summary, script, out) = run(script);
        assert_eq!(summary.o_wins, 1);
        assert!(out.contains("Bob CONGRATS!! you win"));
        assert!(out.contains("please enter valid answer (Y/N)"));
        assert!(!out.contains("THANK YOU"));
        assert_eq!(script.names.len(), 2);
    }

    #[test]
    fn test_input_closed_mid_round() {
        let script = Script {
            names: ["Ada", "Bob"].into(),
            moves: ["5", "1"].into(),
            ..Default::default()
        };
        let (summary, _, out) = run(script);
        assert_eq!(summary, SessionSummary::default());
        assert!(!out.contains("CONGRATS"));
    }
}
