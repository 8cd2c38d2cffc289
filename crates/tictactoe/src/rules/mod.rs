//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state.
//! Rules are separated from board storage so the move contract and
//! the game engine can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};

use crate::outcome::Outcome;
use crate::types::Board;
use tracing::instrument;

/// Evaluates the board after a committed move.
///
/// A completed line wins; otherwise a full board is a tie; otherwise
/// the game continues (`None`).
#[instrument(skip(board), ret)]
pub fn evaluate(board: &Board) -> Option<Outcome> {
    if let Some(winner) = check_winner(board) {
        Some(Outcome::Won(winner))
    } else if is_draw(board) {
        Some(Outcome::Tie)
    } else {
        None
    }
}
