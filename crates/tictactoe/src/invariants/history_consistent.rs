//! History consistency invariant: every filled square has a recorded move.

use super::Invariant;
use crate::Game;

/// Invariant: the number of filled squares equals the history length.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        game.board().filled() == game.history().len()
    }

    fn description() -> &'static str {
        "Filled squares match move history"
    }
}
