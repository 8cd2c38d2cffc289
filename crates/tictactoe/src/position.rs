//! Board coordinates and `row,column` input parsing.

use crate::types::BOARD_SIZE;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument};

/// A zero-based `(row, col)` coordinate.
///
/// Parsing only guarantees both indices were at least 1 in the input.
/// Whether the coordinate actually lies on the board is decided when the
/// move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Position {
    /// Zero-based row, top to bottom.
    pub row: usize,
    /// Zero-based column, left to right.
    pub col: usize,
}

impl Position {
    /// Converts position to a row-major board index, if it lies on the board.
    pub fn to_index(self) -> Option<usize> {
        if self.row < BOARD_SIZE && self.col < BOARD_SIZE {
            Some(self.row * BOARD_SIZE + self.col)
        } else {
            None
        }
    }

    /// Creates position from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        if index < BOARD_SIZE * BOARD_SIZE {
            Some(Self::new(index / BOARD_SIZE, index % BOARD_SIZE))
        } else {
            None
        }
    }

    /// Returns true if both indices lie on the board.
    pub fn on_board(self) -> bool {
        self.to_index().is_some()
    }
}

/// Shown 1-based, as the player typed it.
impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row + 1, self.col + 1)
    }
}

/// Why a line of input is not a `row,column` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParsePositionError {
    /// Input did not split into exactly two comma-separated tokens.
    #[display("Expected two numbers separated by a comma")]
    WrongTokenCount,
    /// A token was not an integer.
    #[display("Couldn't parse row/column, expected an integer")]
    NotAnInteger,
    /// A token was zero or negative.
    #[display("Couldn't parse row/column, index must start from 1")]
    IndexBelowOne,
}

impl From<std::num::ParseIntError> for ParsePositionError {
    fn from(_: std::num::ParseIntError) -> Self {
        ParsePositionError::NotAnInteger
    }
}

/// Converts a 1-based index to zero-based.
fn zero_based(index: i32) -> Result<usize, ParsePositionError> {
    if index < 1 {
        return Err(ParsePositionError::IndexBelowOne);
    }
    usize::try_from(index - 1).map_err(|_| ParsePositionError::IndexBelowOne)
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parses a 1-based `row,column` pair. Whitespace anywhere is ignored.
    #[instrument(level = "debug")]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let tokens: Vec<&str> = compact.split(',').collect();

        let [row, col] = tokens.as_slice() else {
            debug!(tokens = tokens.len(), "Wrong token count");
            return Err(ParsePositionError::WrongTokenCount);
        };

        let row: i32 = row.parse()?;
        let col: i32 = col.parse()?;

        Ok(Position::new(zero_based(row)?, zero_based(col)?))
    }
}
