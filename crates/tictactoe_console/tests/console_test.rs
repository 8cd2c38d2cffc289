//! Scripted console games checked against the exact transcript.

use std::io::Cursor;
use tictactoe::{Outcome, Player};
use tictactoe_console::{Console, ConsoleError};

fn run(input: &str, first: Player) -> (Result<Outcome, ConsoleError>, String) {
    let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), first);
    let result = console.run();
    let text = String::from_utf8(console.into_output()).unwrap();
    (result, text)
}

fn prompt(player: &str) -> String {
    format!(
        "\nWhere does player {} want to play? Give a row,column pair: ",
        player
    )
}

fn board(rows: [&str; 3]) -> String {
    format!("\n{}\n- - - \n{}\n- - - \n{}\n", rows[0], rows[1], rows[2])
}

#[test]
fn test_left_column_win_transcript() {
    let (result, text) = run("1,1\n1,2\n2,1\n2,2\n3,1\n", Player::X);
    assert_eq!(result.unwrap(), Outcome::Won(Player::X));

    let mut expected = String::from("Welcome to tic-tac-toe!\n");
    for (player, rows) in [
        ("X", ["X| | ", " | | ", " | | "]),
        ("O", ["X|O| ", " | | ", " | | "]),
        ("X", ["X|O| ", "X| | ", " | | "]),
        ("O", ["X|O| ", "X|O| ", " | | "]),
        ("X", ["X|O| ", "X|O| ", "X| | "]),
    ] {
        expected.push_str(&prompt(player));
        expected.push_str(&board(rows));
    }
    expected.push_str("\nGame Over: Player X Wins!\n");

    assert_eq!(text, expected);
}

#[test]
fn test_validation_messages_transcript() {
    let input = "x\n2;2\n0,2\nb,2\n2,4\n4,2\n2,2\n2,2\n1,1\n1,2\n3,3\n1,3\n2,1\n2,3\n3,1\n";
    let (result, text) = run(input, Player::X);
    assert_eq!(result.unwrap(), Outcome::Won(Player::O));

    let mut expected = String::from("Welcome to tic-tac-toe!\n");
    for message in [
        "Expected two numbers separated by a comma",
        "Expected two numbers separated by a comma",
        "Couldn't parse row/column, index must start from 1",
        "Couldn't parse row/column, expected an integer",
        "Column must be between 1 and 3",
        "Row must be between 1 and 3",
    ] {
        expected.push_str(&prompt("X"));
        expected.push_str(message);
        expected.push('\n');
    }
    expected.push_str(&prompt("X"));
    expected.push_str(&board([" | | ", " |X| ", " | | "]));
    expected.push_str(&prompt("O"));
    expected.push_str("Cannot place in a cell which is already occupied!\n");
    expected.push_str(&prompt("O"));
    expected.push_str(&board(["O| | ", " |X| ", " | | "]));
    expected.push_str(&prompt("X"));
    expected.push_str(&board(["O|X| ", " |X| ", " | | "]));
    expected.push_str(&prompt("O"));
    expected.push_str(&board(["O|X| ", " |X| ", " | |O"]));
    expected.push_str(&prompt("X"));
    expected.push_str(&board(["O|X|X", " |X| ", " | |O"]));

    expected.push_str(&prompt("O"));
    expected.push_str(&board(["O|X|X", "O|X| ", " | |O"]));
    expected.push_str(&prompt("X"));
    expected.push_str(&board(["O|X|X", "O|X|X", " | |O"]));
    expected.push_str(&prompt("O"));
    expected.push_str(&board(["O|X|X", "O|X|X", "O| |O"]));
    expected.push_str("\nGame Over: Player O Wins!\n");

    assert_eq!(text, expected);
}

#[test]
fn test_tie_transcript_ends_with_tie() {
    let input = "1,1\n1,2\n1,3\n2,2\n2,1\n2,3\n3,2\n3,1\n3,3\n";
    let (result, text) = run(input, Player::X);
    assert_eq!(result.unwrap(), Outcome::Tie);
    assert!(text.ends_with(&format!(
        "{}\nGame Over: Tie!\n",
        board(["X|O|X", "X|O|O", "O|X|X"])
    )));
    assert_eq!(text.matches("Where does player X").count(), 5);
    assert_eq!(text.matches("Where does player O").count(), 4);
}

#[test]
fn test_o_first_player() {
    let (result, text) = run("1,1\n2,1\n1,2\n2,2\n1,3\n", Player::O);
    assert_eq!(result.unwrap(), Outcome::Won(Player::O));
    assert!(text.starts_with(&format!("Welcome to tic-tac-toe!\n{}", prompt("O"))));
    assert!(text.ends_with("\nGame Over: Player O Wins!\n"));
}

#[test]
fn test_input_closed_mid_game() {
    let (result, text) = run("1,1\n2,2\n", Player::X);
    assert!(matches!(result, Err(ConsoleError::InputClosed)));
    assert!(!text.contains("Game Over"));
}
