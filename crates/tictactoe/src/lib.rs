//! Tic-tac-toe game logic.
//!
//! Pure rules with no I/O: the board, move validation through contracts,
//! and win/tie evaluation. Front ends drive a [`Game`] by parsing player
//! input into a [`Position`] and calling [`Game::place`].
//!
//! # Example
//!
//! ```
//! use tictactoe::{Game, Outcome, Player, Position};
//!
//! let mut game = Game::new(Player::X);
//! for input in ["1,1", "2,1", "1,2", "2,2"] {
//!     let pos: Position = input.parse()?;
//!     assert_eq!(game.place(pos)?, None);
//! }
//! assert_eq!(game.place("1,3".parse()?)?, Some(Outcome::Won(Player::X)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod outcome;
mod position;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use game::Game;
pub use outcome::Outcome;
pub use position::{ParsePositionError, Position};
pub use types::{BOARD_SIZE, Board, Player, Square};
