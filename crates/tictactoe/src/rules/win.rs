//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use strum::IntoEnumIterator;
use tracing::instrument;

const fn at(row: usize, col: usize) -> Position {
    Position { row, col }
}

/// The eight winning lines, in evaluation order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    // Columns
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    // Diagonals
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];

/// Returns the player holding all three squares of a line.
fn line_owner(board: &Board, line: &[Position; 3]) -> Option<Player> {
    Player::iter().find(|player| {
        line.iter()
            .all(|pos| board.get(*pos).and_then(Square::owner) == Some(*player))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line (rows, then columns, then
/// the main and anti diagonals) held entirely by one player.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|line| line_owner(board, line))
}
