//! Integration tests for the terminal front end.
//!
//! Drives complete sessions through the library API the binary uses:
//! parse a line, execute it, inspect the reply and the bracket.

use nb_cli::{
    commands::parse_command,
    session::{Reply, Session},
};
use nexus_bracket::{BracketConfig, MatchId, SlotPosition};

fn run_line(session: &mut Session, line: &str) -> String {
    let command = parse_command(line).expect("line should parse");
    match session.execute(command).expect("command should succeed") {
        Reply::Print(text) => text,
        Reply::Quit => String::new(),
    }
}

#[test]
fn test_play_five_player_bracket_to_the_end() {
    let mut session = Session::new(BracketConfig::with_names([
        "Ada", "Brook", "Cyd", "Dee", "Eli",
    ]));

    // Play-in, then the two second-round matches, then the final
    run_line(&mut session, "mark 1 lower");
    run_line(&mut session, "mark 2 upper");
    run_line(&mut session, "mark 3 lower");
    let text = run_line(&mut session, "mark r2m0 lower");
    assert!(text.contains("Eli (lower) wins r2m0"));

    let status = run_line(&mut session, "status");
    assert!(status.contains("Finals: 1/1 decided (complete)"));
    assert!(status.contains("Champion: Eli"));

    let shown = run_line(&mut session, "show");
    assert!(shown.contains("  * Brook"));
    assert!(shown.contains("== Champion ==\n  Eli"));
}

#[test]
fn test_toggle_twice_restores_bracket() {
    let mut session = Session::new(BracketConfig::new(8));
    let before = session.bracket().rounds().to_vec();

    run_line(&mut session, "toggle 1 upper");
    assert!(
        session
            .bracket()
            .get_match(MatchId::new(0, 0))
            .unwrap()
            .is_winner(SlotPosition::Upper)
    );

    run_line(&mut session, "toggle 1 upper");
    assert_eq!(session.bracket().rounds(), &before[..]);
}

#[test]
fn test_retraction_reports_unwound_rounds() {
    let mut session = Session::new(BracketConfig::new(4));
    run_line(&mut session, "mark 1 upper");
    run_line(&mut session, "mark 2 upper");
    run_line(&mut session, "mark 3 upper");

    let text = run_line(&mut session, "clear 1");
    assert!(text.contains("winner of r0m0 cleared"));
    assert!(text.contains("winner of r1m0 cleared"));
    assert!(text.contains("round 1 reopened"));
    assert!(text.contains("round 2 reopened"));
    assert_eq!(session.bracket().champion(), None);
}

#[test]
fn test_rejected_commands_leave_bracket_untouched() {
    let mut session = Session::new(BracketConfig::new(4));
    let before = session.bracket().rounds().to_vec();

    for line in ["mark 9 upper", "clear r5m0", "mark r2m0 upper"] {
        let command = parse_command(line).unwrap();
        assert!(session.execute(command).is_err(), "{line} should be rejected");
    }
    assert_eq!(session.bracket().rounds(), &before[..]);
}

#[test]
fn test_json_output() {
    let mut session = Session::new(BracketConfig::new(2));
    let text = run_line(&mut session, "json");
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["config"]["playerCount"], 2);
    assert_eq!(value["rounds"][0]["name"], "Finals");
}
