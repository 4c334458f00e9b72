//! Content domain: tests for tuning file loading.

use std::fs;
use std::path::PathBuf;

use super::load_controller_tuning;

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("wallkick_{}_{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_partial_tuning_file() {
    let path = scratch_file(
        "partial.ron",
        "(move_speed: 7.5, abilities: (double_jump: false), wall_slide: (idle_multiplier: 0.5))",
    );

    let tuning = load_controller_tuning(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(tuning.move_speed, 7.5);
    assert!(!tuning.abilities.double_jump);
    assert!(tuning.abilities.wall_interactions);
    assert_eq!(tuning.wall_slide.idle_multiplier, 0.5);
    assert_eq!(tuning.wall_slide.held_multiplier, 1.0);
}

#[test]
fn test_missing_file_reports_io_error() {
    let path = std::env::temp_dir().join("wallkick_definitely_missing.ron");

    let err = load_controller_tuning(&path).unwrap_err();

    assert!(err.message.starts_with("IO error"));
    assert!(err.to_string().contains("wallkick_definitely_missing.ron"));
}

#[test]
fn test_malformed_file_reports_parse_error() {
    let path = scratch_file("malformed.ron", "(move_speed: \"fast\")");

    let err = load_controller_tuning(&path).unwrap_err();
    fs::remove_file(&path).ok();

    assert!(err.message.starts_with("Parse error"));
}

#[test]
fn test_invalid_values_rejected_at_load() {
    let path = scratch_file("negative.ron", "(knockback_duration: -1.0)");

    let err = load_controller_tuning(&path).unwrap_err();
    fs::remove_file(&path).ok();

    assert!(err.message.starts_with("Invalid tuning"));
    assert!(err.message.contains("knockback_duration"));
}

#[test]
fn test_shipped_tuning_file_is_valid() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(super::PLAYER_TUNING_FILE);

    assert!(load_controller_tuning(&path).is_ok());
}
