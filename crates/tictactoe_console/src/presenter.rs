//! Presenters turn engine snapshots into something a player can read.

use crate::config::Glyphs;
use crate::error::RejectedMove;
use std::io::{self, Write};
use tictactoe_engine::{Board, Cell, GameStatus, InvalidMove, Mark, MoveError};
use tracing::{debug, instrument};

/// Renders boards, outcomes and messages.
pub trait Presenter {
    /// Shows the session title.
    fn render_title(&mut self) -> io::Result<()>;

    /// Announces who plays which mark.
    fn render_turn_order(&mut self, player_x: &str, player_o: &str) -> io::Result<()>;

    /// Draws the board. `updated` is false before the first move of a round.
    fn render(&mut self, board: &Board, updated: bool) -> io::Result<()>;

    /// Explains why a move request was refused.
    fn render_rejection(&mut self, rejection: &RejectedMove) -> io::Result<()>;

    /// Announces a finished round.
    fn render_result(&mut self, status: GameStatus, player_x: &str, player_o: &str)
    -> io::Result<()>;

    /// Says goodbye after the players decline another round.
    fn render_farewell(&mut self) -> io::Result<()>;

    /// Reports a replay answer other than `Y` or `N`.
    fn render_invalid_replay(&mut self, answer: &str) -> io::Result<()>;
}

/// Plain-text presenter writing to any [`Write`].
pub struct ConsolePresenter<W> {
    out: W,
    glyphs: Glyphs,
}

impl<W: Write> ConsolePresenter<W> {
    /// Creates a presenter over the given writer.
    pub fn new(out: W, glyphs: Glyphs) -> Self {
        Self { out, glyphs }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Formats the board as a 3x3 grid, keypad numbers in empty cells.
    pub fn draw_board(&self, board: &Board) -> String {
        let mut grid = String::new();
        for (row_idx, row) in board.rows().iter().enumerate() {
            let labels: Vec<char> = row
                .iter()
                .enumerate()
                .map(|(col_idx, cell)| match cell {
                    Cell::Empty => {
                        char::from_digit((row_idx * 3 + col_idx + 1) as u32, 10).unwrap_or('?')
                    }
                    Cell::Occupied(mark) => self.glyphs.glyph(*mark),
                })
                .collect();
            grid.push_str("       |     |\n");
            grid.push_str(&format!(
                "    {}  |  {}  |  {}\n",
                labels[0], labels[1], labels[2]
            ));
            if row_idx < 2 {
                grid.push_str("  _____|_____|_____\n");
            } else {
                grid.push_str("       |     |\n");
            }
        }
        grid
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn render_title(&mut self) -> io::Result<()> {
        writeln!(self.out, "* TIC - TAC - TOE *\n")
    }

    fn render_turn_order(&mut self, player_x: &str, player_o: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "{} First turn [{}]\n{} Second turn [{}]\n",
            player_x, self.glyphs.x, player_o, self.glyphs.o
        )
    }

    #[instrument(skip(self, board))]
    fn render(&mut self, board: &Board, updated: bool) -> io::Result<()> {
        if updated {
            writeln!(self.out, "UPDATED BOARD\n")?;
        }
        let grid = self.draw_board(board);
        writeln!(self.out, "{}", grid)?;
        self.out.flush()
    }

    fn render_rejection(&mut self, rejection: &RejectedMove) -> io::Result<()> {
        debug!(%rejection, "Rendering rejection");
        let message = match rejection {
            RejectedMove::Malformed(_)
            | RejectedMove::Engine(MoveError::InvalidMove(InvalidMove::OutOfRange(_))) => {
                "Invalid !!! Enter a number from 1 to 9".to_string()
            }
            RejectedMove::Engine(MoveError::InvalidMove(InvalidMove::CellOccupied(_))) => {
                "There is no empty space please try again".to_string()
            }
            RejectedMove::Engine(MoveError::GameOver(_)) => "The game is already over".to_string(),
            RejectedMove::Engine(other) => other.to_string(),
        };
        writeln!(self.out, "{}\n", message)
    }

    #[instrument(skip(self))]
    fn render_result(
        &mut self,
        status: GameStatus,
        player_x: &str,
        player_o: &str,
    ) -> io::Result<()> {
        match status {
            GameStatus::Win(mark) => {
                let winner = match mark {
                    Mark::X => player_x,
                    Mark::O => player_o,
                };
                writeln!(self.out, "------ {} CONGRATS!! you win ------\n", winner)?;
            }
            GameStatus::Draw => writeln!(self.out, "DRAW!\n")?,
            GameStatus::InProgress => debug!("No result to render while in progress"),
        }
        self.out.flush()
    }

    fn render_farewell(&mut self) -> io::Result<()> {
        writeln!(self.out, "****** THANK YOU ******")?;
        self.out.flush()
    }

    fn render_invalid_replay(&mut self, answer: &str) -> io::Result<()> {
        debug!(answer, "Replay answer not understood");
        writeln!(self.out, "please enter valid answer (Y/N)")?;
        self.out.flush()
    }
}
