//! Console error types.

use derive_more::{Display, Error};
use tictactoe::MoveError;

/// Failure that ends a console game before a terminal state.
///
/// Player input mistakes never surface here; they are reported on the
/// console and the player is asked again.
#[derive(Debug, Display, Error)]
pub enum ConsoleError {
    /// Reading from or writing to the console failed.
    #[display("Console I/O error: {}", _0)]
    Io(#[error(source)] std::io::Error),
    /// Input reached end-of-file before the game finished.
    #[display("Input closed before the game finished")]
    InputClosed,
    /// The engine rejected a move for a reason players cannot fix.
    #[display("Game engine error: {}", _0)]
    Move(#[error(source)] MoveError),
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<MoveError> for ConsoleError {
    fn from(err: MoveError) -> Self {
        Self::Move(err)
    }
}
