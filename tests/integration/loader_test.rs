//! Tests for loading snapshots and configuration from disk

use std::fs;

use sport_impact::loader::{load_config, load_program_record};
use sport_impact::{FallbackPolicy, ImpactError};

use crate::utils::temp_file;

#[test]
fn test_load_session_dump() {
    let path = temp_file("session.json");
    fs::write(
        &path,
        r#"{
            "programForm": {"sportsEnabled": true, "sports": []},
            "programsPage": {
                "sportsEnabled": true,
                "sports": [{"typeOfSport": "Rugby", "participants": 30,
                            "sessionsPerWeekOpt": "More", "minutesPerSession": 30}]
            }
        }"#,
    )
    .unwrap();

    let record = load_program_record(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(record.sports.len(), 1);
    assert_eq!(record.sports[0].sessions_per_week, 6.0);
}

#[test]
fn test_missing_snapshot_is_a_file_access_error() {
    let path = temp_file("does-not-exist.json");
    let err = load_program_record(&path).unwrap_err();
    assert!(matches!(err, ImpactError::FileAccess { .. }));
}

#[test]
fn test_malformed_snapshot_is_a_json_error() {
    let path = temp_file("broken.json");
    fs::write(&path, "{ not json").unwrap();
    let err = load_program_record(&path).unwrap_err();
    fs::remove_file(&path).unwrap();
    assert!(matches!(err, ImpactError::Json(_)));
}

#[test]
fn test_load_config_validates() {
    let path = temp_file("config.json");
    fs::write(&path, r#"{"adherence": 0.75, "fallback_policy": "PerTotal"}"#).unwrap();
    let config = load_config(&path).unwrap();
    assert_eq!(config.adherence, 0.75);
    assert_eq!(config.fallback_policy, FallbackPolicy::PerTotal);

    fs::write(&path, r#"{"adherence": 3.0}"#).unwrap();
    let err = load_config(&path).unwrap_err();
    fs::remove_file(&path).unwrap();
    assert!(matches!(err, ImpactError::InvalidConfig(_)));
}
