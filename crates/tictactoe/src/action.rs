//! First-class move types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They record the player's
//! intent and can be validated independently of execution.

use crate::position::Position;
use crate::types::{BOARD_SIZE, Player};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Error that can occur when validating or applying a move.
///
/// The display text of each rejection is the message shown to players.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The column lies off the board.
    #[display("Column must be between 1 and {}", BOARD_SIZE)]
    ColumnOutOfBounds,

    /// The row lies off the board.
    #[display("Row must be between 1 and {}", BOARD_SIZE)]
    RowOutOfBounds,

    /// The square at the position is already occupied.
    #[display("Cannot place in a cell which is already occupied!")]
    SquareOccupied(Position),

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl MoveError {
    /// Returns true for rejections a player can fix by choosing another square.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MoveError::ColumnOutOfBounds | MoveError::RowOutOfBounds | MoveError::SquareOccupied(_)
        )
    }
}

impl std::error::Error for MoveError {}
