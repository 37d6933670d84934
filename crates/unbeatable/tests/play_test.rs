//! Drives the terminal front end with in-memory input and output.

use std::io::Cursor;
use unbeatable::{run_analyze, run_interactive, run_self_play};
use unbeatable_tictactoe::{GameSession, GameSnapshot, GameStatus, Player};

fn play(human: Player, script: &str) -> (GameSnapshot, String) {
    let mut session = GameSession::new(human);
    let mut output = Vec::new();
    let snapshot = run_interactive(&mut session, Cursor::new(script), &mut output).unwrap();
    (snapshot, String::from_utf8(output).unwrap())
}

#[test]
fn test_move_gets_a_reply() {
    let (snapshot, output) = play(Player::X, "5\nq\n");
    assert_eq!(*snapshot.move_count(), 2);
    assert_eq!(*snapshot.current_turn(), Player::X);
    assert!(output.contains("Computer plays"), "{output}");
}

#[test]
fn test_bad_input_is_reported_and_ignored() {
    let (snapshot, output) = play(Player::X, "banana\n3 3\n1 1\n1 1\nq\n");
    assert!(output.contains("unrecognized input 'banana'"), "{output}");
    assert!(output.contains("Illegal move"), "{output}");
    // Only the first "1 1" lands; the second hits an occupied square.
    assert_eq!(*snapshot.move_count(), 2);
}

#[test]
fn test_computer_opens_when_human_is_o() {
    let (snapshot, output) = play(Player::O, "");
    assert_eq!(*snapshot.move_count(), 1);
    assert!(output.contains("Computer plays Top-left."), "{output}");
}

#[test]
fn test_full_game_then_reset() {
    // Trying every cell in order plays the lowest free cell each turn.
    let script = "1\n2\n3\n4\n5\n6\n7\n8\n9\n";
    let (finished, output) = play(Player::X, script);
    assert!(finished.status().is_terminal(), "{output}");
    assert!(!matches!(
        finished.status(),
        GameStatus::Won {
            winner: Player::X,
            ..
        }
    ));
    assert!(output.contains("Press 'r' to restart"), "{output}");

    let (reset, output) = play(Player::X, &format!("{script}r\nq\n"));
    assert_eq!(*reset.move_count(), 0);
    assert!(output.contains("Game restarted."));
}

#[test]
fn test_help_lists_commands() {
    let (_, output) = play(Player::X, "h\nq\n");
    assert!(output.contains("r, reset"));
}

#[test]
fn test_self_play_draws() {
    let mut output = Vec::new();
    let snapshot = run_self_play(false, &mut output).unwrap();
    assert_eq!(*snapshot.status(), GameStatus::Draw);
    assert!(String::from_utf8(output).unwrap().contains("Result: draw"));
}

#[test]
fn test_self_play_json() {
    let mut output = Vec::new();
    run_self_play(true, &mut output).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["move_count"], 9);
    assert_eq!(json["status"], "Draw");
}

#[test]
fn test_analyze_finds_block() {
    let mut output = Vec::new();
    run_analyze("X.. X.. ..O", &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("O to move:"), "{output}");
    assert!(output.contains("loss"), "{output}");
    assert!(output.contains("Best move: Bottom-left"), "{output}");
}

#[test]
fn test_analyze_finished_board() {
    let mut output = Vec::new();
    run_analyze("XXX OO. ...", &mut output).unwrap();
    assert!(String::from_utf8(output).unwrap().contains("Game over: X won on"));
}

#[test]
fn test_analyze_rejects_bad_board() {
    let err = run_analyze("XXXX", &mut Vec::new()).unwrap_err();
    assert!(err.to_string().contains("invalid board"));
}
