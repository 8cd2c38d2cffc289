//! Turn loop for a two-player game on a text console.
//!
//! The loop is generic over its streams so tests can script a whole game
//! with an in-memory reader and writer.

use crate::error::ConsoleError;
use std::io::{BufRead, Write};
use tictactoe::{Game, Outcome, Player, Position};
use tracing::{debug, info, instrument, warn};

/// Banner printed once before the first prompt.
pub const WELCOME: &str = "Welcome to tic-tac-toe!";

/// Drives one game from an empty board to a terminal state.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    game: Game,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console with a fresh game and `first_player` to move.
    pub fn new(input: R, output: W, first_player: Player) -> Self {
        Self {
            input,
            output,
            game: Game::new(first_player),
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays until a player wins or the board fills.
    ///
    /// # Errors
    ///
    /// Fails on console I/O errors, if input closes mid-game, or if the
    /// engine reports an invariant violation.
    #[instrument(skip(self), fields(first = %self.game.first_player()))]
    pub fn run(&mut self) -> Result<Outcome, ConsoleError> {
        writeln!(self.output, "{}", WELCOME)?;
        info!("Game started");

        loop {
            let outcome = self.take_turn()?;
            self.render_board()?;

            if let Some(outcome) = outcome {
                writeln!(self.output)?;
                writeln!(self.output, "Game Over: {}", outcome)?;
                self.output.flush()?;
                self.log_record();
                return Ok(outcome);
            }
        }
    }

    /// Prompts and places until the current player's move is accepted.
    #[instrument(skip(self), fields(player = %self.game.to_move()))]
    pub fn take_turn(&mut self) -> Result<Option<Outcome>, ConsoleError> {
        loop {
            let pos = self.prompt_move()?;
            match self.game.place(pos) {
                Ok(outcome) => return Ok(outcome),
                Err(e) if e.is_recoverable() => {
                    debug!(%pos, error = %e, "Placement rejected");
                    writeln!(self.output, "{}", e)?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Reads lines until one parses as a `row,column` pair.
    ///
    /// The result is not bounds-checked.
    pub fn prompt_move(&mut self) -> Result<Position, ConsoleError> {
        loop {
            writeln!(self.output)?;
            write!(
                self.output,
                "Where does player {} want to play? Give a row,column pair: ",
                self.game.to_move()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                warn!("Input closed mid-game");
                return Err(ConsoleError::InputClosed);
            }

            match line.parse::<Position>() {
                Ok(pos) => return Ok(pos),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    /// Writes a blank line followed by the board.
    pub fn render_board(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.game.board())?;
        Ok(())
    }

    fn log_record(&self) {
        match serde_json::to_string(&self.game) {
            Ok(record) => debug!(%record, "Final game record"),
            Err(e) => warn!(error = %e, "Could not serialize game record"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), Player::X)
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_prompt_returns_zero_based() {
        let mut console = console("2,3\n");
        assert_eq!(console.prompt_move().unwrap(), Position::new(1, 2));
    }

    #[test]
    fn test_prompt_reprompts_after_bad_input() {
        let mut console = console("1\na,1\n0,1\n 3 , 3 \n");
        assert_eq!(console.prompt_move().unwrap(), Position::new(2, 2));

        let text = output(console);
        assert_eq!(text.matches("Where does player X want to play?").count(), 4);
        assert!(text.contains("Expected two numbers separated by a comma\n"));
        assert!(text.contains("Couldn't parse row/column, expected an integer\n"));
        assert!(text.contains("Couldn't parse row/column, index must start from 1\n"));
    }

    #[test]
    fn test_prompt_passes_off_board_through() {
        let mut console = console("4,1\n");
        assert_eq!(console.prompt_move().unwrap(), Position::new(3, 0));
    }

    #[test]
    fn test_take_turn_retries_until_placed() {
        let mut console = console("1,4\n4,1\n1,1\n");
        assert_eq!(console.take_turn().unwrap(), None);
        assert_eq!(console.game().to_move(), Player::O);

        let text = output(console);
        assert!(text.contains("Column must be between 1 and 3\n"));
        assert!(text.contains("Row must be between 1 and 3\n"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut console = console("");
        assert!(matches!(
            console.prompt_move(),
            Err(ConsoleError::InputClosed)
        ));
    }
}
