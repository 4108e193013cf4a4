//! Input providers: where names, moves, and replay answers come from.

use crate::config::Glyphs;
use crate::error::InputError;
use std::io::{BufRead, Write};
use tictactoe_engine::Mark;
use tracing::{debug, instrument, warn};

/// Which of the two players is being asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlayerSlot {
    /// Player 1 plays X and moves first.
    #[display("player-1")]
    First,
    /// Player 2 plays O.
    #[display("player-2")]
    Second,
}

/// Answer to the play-again prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayAnswer {
    /// `Y`: start another round.
    Again,
    /// `N`: end the session.
    Quit,
    /// Anything else; the session ends after saying so.
    Invalid(String),
}

/// Source of player decisions.
///
/// Implementations only parse; range and occupancy checks belong to
/// the engine.
pub trait InputProvider {
    /// Asks for a player's name.
    fn request_name(&mut self, slot: PlayerSlot) -> Result<String, InputError>;

    /// Asks the player holding `mark` for a keypad number.
    ///
    /// Non-numeric input yields [`InputError::Malformed`].
    fn request_move(&mut self, mark: Mark, player_name: &str) -> Result<i64, InputError>;

    /// Asks whether to play another round.
    fn request_replay(&mut self) -> Result<ReplayAnswer, InputError>;
}

/// Line-based input from a reader, with prompts written to a writer.
pub struct ConsoleInput<R, W> {
    reader: R,
    prompts: W,
    glyphs: Glyphs,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    /// Creates console input over the given reader and prompt writer.
    pub fn new(reader: R, prompts: W, glyphs: Glyphs) -> Self {
        Self {
            reader,
            prompts,
            glyphs,
        }
    }

    /// Returns the prompt writer.
    pub fn into_prompts(self) -> W {
        self.prompts
    }

    fn prompt(&mut self, text: &str) -> Result<(), InputError> {
        write!(self.prompts, "{}", text)?;
        self.prompts.flush()?;
        Ok(())
    }

    /// Reads the next non-blank line, trimmed.
    fn next_line(&mut self) -> Result<String, InputError> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                debug!("Input closed");
                return Err(InputError::EndOfInput);
            }
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
        }
    }
}

impl<R: BufRead, W: Write> InputProvider for ConsoleInput<R, W> {
    #[instrument(skip(self))]
    fn request_name(&mut self, slot: PlayerSlot) -> Result<String, InputError> {
        self.prompt(&format!("Enter the name of {} : ", slot))?;
        let line = self.next_line()?;
        writeln!(self.prompts)?;
        // Names are single words; anything after the first one is dropped.
        let name = line.split_whitespace().next().unwrap_or_default().to_string();
        debug!(%slot, %name, "Name entered");
        Ok(name)
    }

    #[instrument(skip(self))]
    fn request_move(&mut self, mark: Mark, player_name: &str) -> Result<i64, InputError> {
        let glyph = self.glyphs.glyph(mark);
        self.prompt(&format!("{} please enter position of [{}] : ", player_name, glyph))?;
        let line = self.next_line()?;
        writeln!(self.prompts)?;
        line.parse::<i64>().map_err(|_| {
            warn!(input = %line, "Move is not a number");
            InputError::Malformed(line)
        })
    }

    #[instrument(skip(self))]
    fn request_replay(&mut self) -> Result<ReplayAnswer, InputError> {
        self.prompt("Do you want to play again ? Y/N : ")?;
        let answer = self.next_line()?;
        writeln!(self.prompts)?;
        Ok(match answer.as_str() {
            "Y" => ReplayAnswer::Again,
            "N" => ReplayAnswer::Quit,
            _ => ReplayAnswer::Invalid(answer),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(script: &str) -> ConsoleInput<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleInput::new(
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            Glyphs::default(),
        )
    }

    #[test]
    fn test_request_name_takes_first_word() {
        let mut input = console("\n  Ada Lovelace\n");
        assert_eq!(input.request_name(PlayerSlot::First).unwrap(), "Ada");
        let prompts = String::from_utf8(input.into_prompts()).unwrap();
        assert!(prompts.contains("Enter the name of player-1 : "));
    }

    #[test]
    fn test_request_move_parses_numbers() {
        let mut input = console("5\n  -4 \n12\n");
        assert_eq!(input.request_move(Mark::X, "Ada").unwrap(), 5);
        assert_eq!(input.request_move(Mark::O, "Bob").unwrap(), -4);
        assert_eq!(input.request_move(Mark::X, "Ada").unwrap(), 12);
        let prompts = String::from_utf8(input.into_prompts()).unwrap();
        assert!(prompts.contains("Ada please enter position of [X] : "));
        assert!(prompts.contains("Bob please enter position of [O] : "));
    }

    #[test]
    fn test_request_move_malformed() {
        let mut input = console("five\n99999999999999999999\n");
        assert!(matches!(
            input.request_move(Mark::X, "Ada"),
            Err(InputError::Malformed(token)) if token == "five"
        ));
        assert!(matches!(
            input.request_move(Mark::X, "Ada"),
            Err(InputError::Malformed(_))
        ));
    }

    #[test]
    fn test_end_of_input() {
        let mut input = console("\n\n");
        assert!(matches!(
            input.request_move(Mark::X, "Ada"),
            Err(InputError::EndOfInput)
        ));
    }

    #[test]
    fn test_replay_answers() {
        let mut input = console("Y\nN\ny\nmaybe\n");
        assert_eq!(input.request_replay().unwrap(), ReplayAnswer::Again);
        assert_eq!(input.request_replay().unwrap(), ReplayAnswer::Quit);
        assert_eq!(
            input.request_replay().unwrap(),
            ReplayAnswer::Invalid("y".to_string())
        );
        assert_eq!(
            input.request_replay().unwrap(),
            ReplayAnswer::Invalid("maybe".to_string())
        );
    }
}
