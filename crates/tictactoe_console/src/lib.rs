//! Two-player tic-tac-toe played over a text console.
//!
//! [`Console`] owns a [`tictactoe::Game`] and runs the prompt/place/render
//! loop over any `BufRead`/`Write` pair. The `tictactoe` binary wires it to
//! stdin and stdout.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod console;
mod error;

pub use cli::{Cli, FirstPlayer};
pub use console::{Console, WELCOME};
pub use error::ConsoleError;
