//! Game engine for tic-tac-toe.
//!
//! `Game` is the single owner of board state. Every mutation goes through
//! [`Game::play`], which checks the move contract before touching the
//! board and re-checks the invariants afterwards.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, MoveContract};
use crate::outcome::Outcome;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Game {
    /// The board.
    pub(crate) board: Board,
    /// Player whose turn it is; after the game ends, the player who moved last.
    #[getter(skip)]
    pub(crate) to_move: Player,
    /// Player who made (or will make) the first move.
    #[getter(skip)]
    pub(crate) first_player: Player,
    /// Committed moves, oldest first.
    pub(crate) history: Vec<Move>,
    /// Set once a line is completed or the board fills.
    pub(crate) outcome: Option<Outcome>,
}

impl Game {
    /// Creates a new game with an empty board and `first_player` to move.
    #[instrument]
    pub fn new(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: first_player,
            first_player,
            history: Vec::new(),
            outcome: None,
        }
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the player who moved first.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Returns true once the game has reached a terminal state.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Places the current player's mark at `pos`.
    ///
    /// On success returns the outcome if this move ended the game, or
    /// `None` when play continues with the other player.
    ///
    /// # Errors
    ///
    /// Returns a rejection without changing the board if the game is over,
    /// the position is off the board, or the square is occupied.
    pub fn place(&mut self, pos: Position) -> Result<Option<Outcome>, MoveError> {
        self.play(Move::new(self.to_move, pos))
    }

    /// Applies a fully specified move.
    ///
    /// # Errors
    ///
    /// As [`Game::place`], plus [`MoveError::WrongPlayer`] if `mov` is not
    /// by the player to move.
    #[instrument(skip_all, fields(mov = %mov))]
    pub fn play(&mut self, mov: Move) -> Result<Option<Outcome>, MoveError> {
        if let Err(e) = MoveContract::pre(self, &mov) {
            debug!(error = %e, "Move rejected");
            return Err(e);
        }

        let before = self.clone();

        self.board.set(mov.position, Square::Occupied(mov.player));
        self.history.push(mov);
        self.outcome = self.evaluate();
        if self.outcome.is_none() {
            self.to_move = mov.player.opponent();
        }

        if let Err(e) = MoveContract::post(&before, self) {
            *self = before;
            return Err(e);
        }

        match self.outcome {
            Some(outcome) => info!(%outcome, moves = self.history.len(), "Game over"),
            None => debug!(next = %self.to_move, "Move committed"),
        }
        Ok(self.outcome)
    }

    /// Evaluates end-of-game conditions on the current board.
    pub fn evaluate(&self) -> Option<Outcome> {
        rules::evaluate(&self.board)
    }

    /// Rebuilds a game by applying `moves` in order.
    ///
    /// # Errors
    ///
    /// Returns the first move rejection encountered.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(first_player: Player, moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new(first_player);
        for mov in moves {
            game.play(*mov)?;
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Player::X)
    }
}
