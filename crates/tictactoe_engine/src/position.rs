//! Board positions and the keypad numbering players type.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A cell address on the tic-tac-toe board.
///
/// Players address cells with the numbered-keypad layout:
///
/// ```text
/// 1 | 2 | 3
/// 4 | 5 | 6
/// 7 | 8 | 9
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (keypad 1)
    TopLeft,
    /// Top-center (keypad 2)
    TopCenter,
    /// Top-right (keypad 3)
    TopRight,
    /// Middle-left (keypad 4)
    MiddleLeft,
    /// Center (keypad 5)
    Center,
    /// Middle-right (keypad 6)
    MiddleRight,
    /// Bottom-left (keypad 7)
    BottomLeft,
    /// Bottom-center (keypad 8)
    BottomCenter,
    /// Bottom-right (keypad 9)
    BottomRight,
}

impl Position {
    /// All 9 positions in keypad order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts a raw keypad number into a position.
    ///
    /// Anything outside 1-9 yields `None`.
    #[instrument]
    pub fn from_keypad(number: i64) -> Option<Self> {
        Self::iter().find(|pos| i64::from(pos.keypad()) == number)
    }

    /// Returns the keypad number (1-9).
    pub fn keypad(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Converts position to board index (0-8, row-major).
    pub fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates position from board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of this position, 0 at the top.
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Column of this position, 0 at the left.
    pub fn column(self) -> usize {
        self.index() % 3
    }

    /// Creates position from a (row, column) pair, each 0-2.
    pub fn from_row_column(row: usize, column: usize) -> Option<Self> {
        if row > 2 || column > 2 {
            return None;
        }
        Self::from_index(row * 3 + column)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.keypad())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_round_trip() {
        for pos in Position::iter() {
            assert_eq!(Position::from_keypad(i64::from(pos.keypad())), Some(pos));
        }
    }

    #[test]
    fn test_keypad_corners() {
        assert_eq!(Position::from_keypad(1), Some(Position::TopLeft));
        assert_eq!(Position::from_keypad(5), Some(Position::Center));
        assert_eq!(Position::from_keypad(9), Some(Position::BottomRight));
    }

    #[test]
    fn test_keypad_out_of_range() {
        for number in [0, 10, -1, i64::MIN, i64::MAX] {
            assert_eq!(Position::from_keypad(number), None, "{number}");
        }
    }

    #[test]
    fn test_row_column() {
        assert_eq!((Position::TopRight.row(), Position::TopRight.column()), (0, 2));
        assert_eq!((Position::BottomLeft.row(), Position::BottomLeft.column()), (2, 0));
        assert_eq!(Position::from_row_column(1, 1), Some(Position::Center));
        assert_eq!(Position::from_row_column(3, 0), None);
        assert_eq!(Position::from_row_column(0, 3), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::Center.to_string(), "Center (5)");
    }
}
