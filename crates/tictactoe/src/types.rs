//! Core domain types for tic-tac-toe.

use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (moves first unless configured otherwise).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the player holding this square, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Square::Empty => write!(f, " "),
            Square::Occupied(player) => write!(f, "{}", player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; BOARD_SIZE * BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; BOARD_SIZE * BOARD_SIZE],
        }
    }

    /// Gets the square at the given position.
    ///
    /// Positions off the board read as `None`.
    pub fn get(&self, pos: Position) -> Option<Square> {
        pos.to_index().map(|idx| self.squares[idx])
    }

    /// Sets the square at the given position.
    ///
    /// Writes to positions off the board are ignored; callers validate
    /// bounds through the move contract first.
    pub fn set(&mut self, pos: Position, square: Square) {
        if let Some(idx) = pos.to_index() {
            self.squares[idx] = square;
        }
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; BOARD_SIZE * BOARD_SIZE] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn filled(&self) -> usize {
        self.squares
            .iter()
            .filter(|s| **s != Square::Empty)
            .count()
    }

    /// Returns one row of the board, left to right, if it lies on the board.
    pub fn row(&self, row: usize) -> Option<&[Square]> {
        if row < BOARD_SIZE {
            Some(&self.squares[row * BOARD_SIZE..(row + 1) * BOARD_SIZE])
        } else {
            None
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders cells joined by `|`, with a `- - - ` line between rows.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "- ".repeat(BOARD_SIZE);
        for row in 0..BOARD_SIZE {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "{}", separator)?;
            }
            for (col, square) in self.row(row).into_iter().flatten().enumerate() {
                if col > 0 {
                    write!(f, "|")?;
                }
                write!(f, "{}", square)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_renders_blanks() {
        let board = Board::new();
        assert_eq!(board.to_string(), " | | \n- - - \n | | \n- - - \n | | ");
    }

    #[test]
    fn test_render_marks() {
        let mut board = Board::new();
        board.set(Position::new(0, 0), Square::Occupied(Player::X));
        board.set(Position::new(1, 1), Square::Occupied(Player::O));
        board.set(Position::new(2, 2), Square::Occupied(Player::X));
        assert_eq!(board.to_string(), "X| | \n- - - \n |O| \n- - - \n | |X");
    }

    #[test]
    fn test_off_board_reads_none() {
        let board = Board::new();
        assert_eq!(board.get(Position::new(3, 0)), None);
        assert!(!board.is_empty(Position::new(0, 3)));
    }

    #[test]
    fn test_row_off_board_is_none() {
        let mut board = Board::new();
        board.set(Position::new(2, 1), Square::Occupied(Player::O));
        assert_eq!(
            board.row(2),
            Some(&[Square::Empty, Square::Occupied(Player::O), Square::Empty][..])
        );
        assert_eq!(board.row(3), None);
    }

    #[test]
    fn test_square_owner() {
        assert_eq!(Square::Empty.owner(), None);
        assert_eq!(Square::Occupied(Player::X).owner(), Some(Player::X));
    }

    #[test]
    fn test_opponent_toggles() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_player_display() {
        assert_eq!(Player::X.to_string(), "X");
        assert_eq!(Player::O.to_string(), "O");
    }
}
