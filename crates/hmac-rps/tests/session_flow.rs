//! Integration tests for a full interactive session.
//!
//! These tests script stdin, capture stdout, and check the printed round
//! the way a user would.

use std::io::Cursor;

use hmac_rps::{CliConfig, Session, SessionEnd};
use hmac_rps_core::{
    compute_hmac,
    games::{determine_winner, MoveSet},
    protocol::Round,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn config() -> CliConfig {
    CliConfig {
        clear_screen: false,
        ..CliConfig::default()
    }
}

fn play(moves: &MoveSet, script: &str, seed: u64) -> (SessionEnd, String, String) {
    let config = config();
    let round = Round::start_with_rng(moves, &mut StdRng::seed_from_u64(seed)).unwrap();
    let shown = round.commitment().to_string();

    let mut input = Cursor::new(script.to_string());
    let mut output = Vec::new();
    let end = Session::new(moves, &config)
        .run(round, &mut input, &mut output)
        .unwrap();

    (end, String::from_utf8(output).unwrap(), shown)
}

fn line_value<'t>(text: &'t str, prefix: &str) -> &'t str {
    text.lines()
        .find_map(|line| line.strip_prefix(prefix))
        .unwrap_or_else(|| panic!("no line starting with {prefix:?}"))
}

/// Play a move and verify the round from the printed output alone
#[test]
fn test_move_reveals_verifiable_round() {
    let moves = MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap();
    let (end, text, shown) = play(&moves, "2\n", 11);

    assert!(text.starts_with(&format!("HMAC: {shown}\n")));
    assert_eq!(line_value(&text, "Enter your move: Your move: "), "Paper");

    let computer_label = line_value(&text, "Computer move: ");
    let key = line_value(&text, "HMAC key: ");
    assert_eq!(compute_hmac(key, computer_label).unwrap(), shown);

    let SessionEnd::Revealed(outcome) = end else {
        panic!("round was not revealed");
    };
    assert_eq!(outcome.user_move, 1);
    assert_eq!(moves.get(outcome.computer_move), Some(computer_label));
    assert!(outcome.verify(&moves));
    assert_eq!(
        outcome.verdict,
        determine_winner(1, outcome.computer_move, moves.len())
    );
    assert!(text.contains(&format!("\n{}\n", outcome.verdict)));
}

#[test]
fn test_commitment_printed_once() {
    let moves = MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap();
    let (_, text, _) = play(&moves, "x\n?\ne\n1\n", 5);

    assert_eq!(text.matches("HMAC: ").count(), 1);
}

#[test]
fn test_invalid_input_reprompts() {
    let moves = MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap();
    let (end, text, _) = play(&moves, "rock\n9\n0\n", 3);

    assert_eq!(end, SessionEnd::Exited);
    assert_eq!(text.matches("Invalid input. Please try again.").count(), 2);
    assert_eq!(text.matches("Available moves:").count(), 3);
    assert!(text.ends_with("Exiting...\n"));
    assert!(!text.contains("HMAC key:"));
}

#[test]
fn test_exit_does_not_reveal() {
    let moves = MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap();
    let (end, text, _) = play(&moves, "0\n", 1);

    assert_eq!(end, SessionEnd::Exited);
    assert!(!text.contains("Computer move:"));
    assert!(!text.contains("HMAC key:"));
}

#[test]
fn test_end_of_input_exits_quietly() {
    let moves = MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap();
    let (end, text, _) = play(&moves, "", 1);

    assert_eq!(end, SessionEnd::Exited);
    assert!(!text.contains("HMAC key:"));
}

#[test]
fn test_help_then_move() {
    let moves = MoveSet::new(["Rock", "Paper", "Scissors", "Lizard", "Spock"]).unwrap();
    let (end, text, _) = play(&moves, "?\nq\ne\n5\n", 9);

    assert!(text.contains("Help Table - Columns Page 1/1"));
    assert!(text.contains("Invalid command. Use [n]ext, [p]revious, or [e]xit."));
    assert_eq!(text.matches("Available moves:").count(), 2);
    assert!(matches!(end, SessionEnd::Revealed(ref o) if o.user_move == 4));
}

#[test]
fn test_help_pages_through_many_moves() {
    let moves = MoveSet::new((1..=13).map(|i| format!("Move{i}"))).unwrap();
    let (_, text, _) = play(&moves, "?\np\nn\nn\ne\n0\n", 4);

    assert_eq!(text.matches("Columns Page 1/2").count(), 2);
    assert_eq!(text.matches("Columns Page 2/2").count(), 2);
    assert!(!text.contains("Invalid command"));
}

#[test]
fn test_page_size_from_config() {
    let moves = MoveSet::new(["Rock", "Paper", "Scissors", "Lizard", "Spock"]).unwrap();
    let config = CliConfig {
        page_size: 2,
        clear_screen: false,
    };
    let round = Round::start(&moves).unwrap();
    let mut output = Vec::new();

    Session::new(&moves, &config)
        .run(round, &mut Cursor::new("?\nn\nn\nn\ne\n0\n"), &mut output)
        .unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Columns Page 3/3"));
    assert!(!text.contains("Columns Page 4/3"));
}

#[test]
fn test_invalid_utf8_input_reprompts() {
    let moves = MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap();
    let config = config();
    let round = Round::start(&moves).unwrap();
    let mut input = Cursor::new(vec![0xff, 0xfe, b'\n', b'0', b'\n']);
    let mut output = Vec::new();

    let end = Session::new(&moves, &config)
        .run(round, &mut input, &mut output)
        .unwrap();

    let text = String::from_utf8(output).unwrap();
    assert_eq!(end, SessionEnd::Exited);
    assert_eq!(text.matches("Invalid input. Please try again.").count(), 1);
    assert!(text.ends_with("Exiting...\n"));
}
