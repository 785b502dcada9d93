//! Headless driver end to end: command lines in, JSON lines out

use blockfall::adapter::{HeadlessDriver, JsonSink};
use blockfall::core::{Game, RenderSink, RulesConfig, SequenceGenerator};
use blockfall::types::PieceKind;
use serde_json::Value;

/// Feed `lines` through a driver and sink, returning the parsed output.
fn run(kinds: &[PieceKind], lines: &[&str]) -> Vec<Value> {
    let game = Game::new(SequenceGenerator::new(kinds.to_vec()), RulesConfig::default());
    let mut driver = HeadlessDriver::new(game);
    let mut sink = JsonSink::new(Vec::new());

    for line in lines {
        match driver.handle_line(line) {
            Ok(report) => {
                sink.set_report(report);
                sink.render(&driver.snapshot()).unwrap();
            }
            Err(err) => sink.write_error(driver.seq(), &err).unwrap(),
        }
    }

    String::from_utf8(sink.into_inner())
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_one_response_per_command() {
    let out = run(
        &[PieceKind::T],
        &[r#"{"actions":[]}"#, "not json", r#"{"reset":true}"#],
    );
    assert_eq!(out.len(), 3);
    assert_eq!(out[0]["type"], "observation");
    assert_eq!(out[1]["type"], "error");
    assert_eq!(out[1]["code"], "invalid_json");
    assert_eq!(out[2]["type"], "observation");
    assert_eq!(out[2]["seq"], 3);
}

#[test]
fn test_observation_shape() {
    let out = run(&[PieceKind::O], &[r#"{"seq":9,"actions":["moveRight"]}"#]);
    let obs = &out[0];

    assert_eq!(obs["seq"], 9);
    assert_eq!(obs["applied"], serde_json::json!([true]));
    assert_eq!(obs["playable"], true);
    assert_eq!(obs["active"]["kind"], "o");
    assert_eq!(obs["active"]["rotation"], "north");
    assert_eq!(obs["active"]["x"], 5);
    assert_eq!(obs["preview_row"], 18);
    assert!(obs.get("held").is_none());

    let cells = obs["board"]["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 20);
    assert_eq!(cells[0][5], 6);
    assert_eq!(obs["preview"][19][6], 6);
}

#[test]
fn test_hard_drop_spawns_next_and_reports_clears() {
    // Two I bars side by side leave a 2-wide hole; an O fills it.
    let drops = [
        r#"{"actions":["moveLeft","moveLeft","moveLeft","moveLeft","hardDrop"]}"#,
        r#"{"actions":["hardDrop"]}"#,
        r#"{"actions":["moveRight","moveRight","moveRight","moveRight","hardDrop"]}"#,
    ];
    let out = run(&[PieceKind::I, PieceKind::I, PieceKind::O], &drops);

    assert_eq!(out[0]["active"]["kind"], "i");
    assert_eq!(out[0]["lines_cleared"], 0);
    assert_eq!(out[1]["active"]["kind"], "o");
    assert_eq!(out[2]["applied"], serde_json::json!([true, true, true, true, true]));
    assert_eq!(out[2]["lines_cleared"], 1);
    assert_eq!(out[2]["board"]["cells"][19][8], 6);
    assert_eq!(out[2]["board"]["cells"][19][0], 0);
}

#[test]
fn test_hold_is_reported() {
    let out = run(&[PieceKind::S, PieceKind::Z], &[r#"{"actions":["hold"]}"#]);
    assert_eq!(out[0]["held"]["kind"], "s");
    assert_eq!(out[0]["active"]["kind"], "z");
    assert_eq!(out[0]["can_hold"], true);
}

#[test]
fn test_unknown_action_is_an_error_and_changes_nothing() {
    let out = run(
        &[PieceKind::T],
        &[r#"{"seq":4,"actions":["moveLeft","teleport"]}"#, r#"{"actions":[]}"#],
    );
    assert_eq!(out[0]["type"], "error");
    assert_eq!(out[0]["code"], "unknown_action");
    assert_eq!(out[0]["seq"], 4);
    assert_eq!(out[1]["seq"], 5);
    assert_eq!(out[1]["active"]["x"], 4);
}
