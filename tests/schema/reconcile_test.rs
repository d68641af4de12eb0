//! Tests for tolerant field resolution

use serde_json::json;
use sport_impact::algorithm::population::resolve_inclusion;
use sport_impact::{resolve_number, scan_for_tokens};

#[test]
fn test_exact_path_beats_token_scan() {
    let record = json!({
        "inclusive": {"school": 5},
        "schoolThings": {"disabilityCount": 9}
    });
    let inclusion = resolve_inclusion(&record);
    assert_eq!(inclusion.school, 5);
    assert!(inclusion.enabled);
}

#[test]
fn test_token_scan_finds_drifted_field() {
    let record = json!({"schoolThings": {"disabilityCount": 9}});
    assert_eq!(scan_for_tokens(&record, &["school", "disab"]), Some(9.0));
    assert_eq!(resolve_inclusion(&record).school, 9);
}

#[test]
fn test_first_numeric_path_wins() {
    let record = json!({
        "a": "not a number",
        "b": {"c": "12"},
        "d": 4
    });
    assert_eq!(resolve_number(&record, &["missing", "a", "b.c", "d"]), Some(12.0));
    assert_eq!(resolve_number(&record, &["missing"]), None);
}

#[test]
fn test_scan_ignores_non_numeric_values() {
    let record = json!({
        "specialNeedsNotes": "lots",
        "nested": {"specialNeeds": {"count": 3}}
    });
    assert_eq!(scan_for_tokens(&record, &["special", "needs"]), Some(3.0));
    assert_eq!(scan_for_tokens(&json!({}), &["special"]), None);
}

#[test]
fn test_negative_headcounts_clamp_to_zero() {
    let inclusion = resolve_inclusion(&json!({"schoolParticipantsDisability": -4}));
    assert_eq!(inclusion.school, 0);
}
