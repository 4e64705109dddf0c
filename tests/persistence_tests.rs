//! Persistence Integration Tests
//!
//! Saved games and rules files on disk.

use std::fs;

use tablut::core::{load_record, load_rules, read_rules, save_record, CoreError};
use tablut::game::{GameError, GameSession};
use tablut_engine::{Coord, Preset, RuleConfiguration, Side};

fn c(row: u8, col: u8) -> Coord {
    Coord::new(row, col)
}

// ============================================================================
// Saved Game Tests
// ============================================================================

#[test]
fn test_save_and_load_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("games").join("opening.json");

    let mut session = GameSession::from_preset(&Preset::tablut()).unwrap();
    session.request_move(c(0, 3), c(2, 3)).unwrap();
    session.request_move(c(6, 4), c(6, 1)).unwrap();
    session.request_move(c(0, 5), c(2, 5)).unwrap();
    session.undo().unwrap();

    save_record(&path, &session.to_record()).unwrap();
    let record = load_record(&path).unwrap();
    assert_eq!(record, session.to_record());

    let mut restored = GameSession::from_record(&record).unwrap();
    assert_eq!(restored.history().current(), 2);
    assert_eq!(restored.position_notation(), session.position_notation());

    let redone = restored.redo().unwrap();
    assert_eq!(redone.captured_pieces.len(), 1);
}

#[test]
fn test_edited_record_is_rejected() {
    //! Changing the rules under a saved game makes its moves replay differently
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.json");

    let mut session = GameSession::new("5/1ap1a/5/5/2k2", 5, RuleConfiguration::default()).unwrap();
    let transition = session.request_move(c(1, 4), c(1, 3)).unwrap();
    assert_eq!(transition.captured_pieces.len(), 1);
    save_record(&path, &session.to_record()).unwrap();

    let json = fs::read_to_string(&path).unwrap();
    let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
    value["rules"]["first_move"] = serde_json::json!("defender");
    fs::write(&path, value.to_string()).unwrap();

    let record = load_record(&path).unwrap();
    let err = GameSession::from_record(&record).unwrap_err();
    assert!(matches!(err, GameError::RecordMismatch { ply: 0, .. }));
}

#[test]
fn test_load_record_reports_bad_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"board_size\": 9 ").unwrap();

    assert!(matches!(load_record(&path), Err(CoreError::Serialization(_))));
    assert!(matches!(
        load_record(&dir.path().join("missing.json")),
        Err(CoreError::Io(_))
    ));
}

// ============================================================================
// Rules File Tests
// ============================================================================

#[test]
fn test_explicit_rules_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.json");
    fs::write(
        &path,
        r#"{ "first_move": "defender", "king_may_reenter_throne": true }"#,
    )
    .unwrap();

    let rules = load_rules(Some(path.as_path()), Preset::tablut().rules).unwrap();
    assert_eq!(rules.first_move, Side::Defender);
    assert!(rules.king_may_reenter_throne);
    assert_eq!(
        rules.citadel_confinement_assist,
        RuleConfiguration::default().citadel_confinement_assist,
        "A rules file replaces the preset rules, missing fields take defaults"
    );
}

#[test]
fn test_invalid_rules_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.json");
    fs::write(&path, r#"{ "first_move": "nobody" }"#).unwrap();

    assert!(matches!(read_rules(&path), Err(CoreError::Serialization(_))));
    assert!(load_rules(Some(path.as_path()), RuleConfiguration::default()).is_err());
}
