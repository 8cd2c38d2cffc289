//! Alternating turn invariant: players alternate starting with the first player.

use super::Invariant;
use crate::Game;

/// Invariant: Players alternate turns.
///
/// Move history must start with the first player and alternate. While the
/// game is in progress, the player to move follows the last mover; once it
/// is over, the turn marker stays with the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        let Some(first) = history.first() else {
            return game.to_move() == game.first_player();
        };

        if first.player != game.first_player() {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        let Some(last) = history.last() else {
            return false;
        };

        match game.outcome() {
            // The turn marker stays with the last mover, who is the winner if any.
            Some(outcome) => {
                game.to_move() == last.player
                    && outcome.winner().is_none_or(|winner| winner == last.player)
            }
            None => game.to_move() == last.player.opponent(),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the first player"
    }
}
