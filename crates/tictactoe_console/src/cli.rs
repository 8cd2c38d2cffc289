//! Command-line interface for the tic-tac-toe console.

use clap::{Parser, ValueEnum};
use tictactoe::Player;

/// Two-player tic-tac-toe on the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Player who moves first
    #[arg(long, value_enum, default_value = "x")]
    pub first_player: FirstPlayer,

    /// Log filter for diagnostics on stderr (RUST_LOG takes precedence)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Mark selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FirstPlayer {
    /// Crosses.
    X,
    /// Noughts.
    O,
}

impl From<FirstPlayer> for Player {
    fn from(value: FirstPlayer) -> Self {
        match value {
            FirstPlayer::X => Player::X,
            FirstPlayer::O => Player::O,
        }
    }
}
