//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::{Move, MoveError};
use crate::game::Game;
use crate::invariants::{InvariantSet, TicTacToeInvariants};
use tracing::{error, instrument};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the game has not ended.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves once an outcome is recorded.
    pub fn check(game: &Game) -> Result<(), MoveError> {
        if game.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the position lies on the board. Column is checked first.
pub struct OnBoard;

impl OnBoard {
    /// Rejects positions outside `[0, 2]` on either axis.
    pub fn check(mov: &Move) -> Result<(), MoveError> {
        let pos = mov.position;
        if pos.on_board() {
            Ok(())
        } else if pos.col >= crate::BOARD_SIZE {
            Err(MoveError::ColumnOutOfBounds)
        } else {
            Err(MoveError::RowOutOfBounds)
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto occupied squares.
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if game.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mov.position))
        }
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the player who is not to move.
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if mov.player == game.to_move() {
            Ok(())
        } else {
            Err(MoveError::WrongPlayer(mov.player))
        }
    }
}

/// Contract for move actions.
///
/// Preconditions, in order: game not over, on board, square empty,
/// player's turn.
///
/// Postconditions: exactly one move was added and all game invariants hold.
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    #[instrument(skip(game))]
    fn pre(game: &Game, action: &Move) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        OnBoard::check(action)?;
        SquareIsEmpty::check(action, game)?;
        PlayersTurn::check(action, game)?;
        Ok(())
    }

    #[instrument(skip_all)]
    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        if after.history().len() != before.history().len() + 1 {
            error!(
                before = before.history().len(),
                after = after.history().len(),
                "History did not grow by one move"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history must grow by one move".to_string(),
            ));
        }

        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            error!(%descriptions, "Invariant violated after move");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
