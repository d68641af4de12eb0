use std::path::PathBuf;

use serde_json::{Value, json};
use sport_impact::ProgramRecord;

/// Tolerance for floating point comparisons
pub const EPS: f64 = 1e-9;

/// Assert two floats are equal within `EPS`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

/// A sport program instance
#[must_use]
pub fn sport(name: &str, participants: u64, sessions: f64, minutes: f64) -> Value {
    json!({
        "typeOfSport": name,
        "participants": participants,
        "location": "Logan",
        "sessionsPerWeek": sessions,
        "minutesPerSession": minutes
    })
}

/// A physical-activity program instance
#[must_use]
pub fn pa(name: &str, mode: &str, participants: u64, sessions: f64, minutes: f64) -> Value {
    json!({
        "name": name,
        "mode": mode,
        "participants": participants,
        "location": "Ipswich",
        "sessionsPerWeek": sessions,
        "minutesPerSession": minutes
    })
}

/// The reference record: 150 enrolled, 100 of them active
#[must_use]
pub fn reference_record() -> ProgramRecord {
    ProgramRecord::from_value(json!({
        "sportsEnabled": true,
        "sports": [
            sport("Basketball", 100, 3.0, 60.0),
            sport("Boccia", 50, 2.0, 40.0)
        ]
    }))
}

/// A unique path in the system temp directory
#[must_use]
pub fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("sport-impact-{}-{name}", std::process::id()))
}
