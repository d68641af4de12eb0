//! Tests for participant aggregation

use serde_json::json;
use sport_impact::{Aggregator, ImpactConfig, ProgramRecord, aggregate};

use crate::utils::{pa, reference_record, sport};

#[test]
fn test_reference_record_totals() {
    let result = aggregate(&reference_record());
    assert_eq!(result.enrolled_participants, 150);
    assert_eq!(result.active_participants, 100);
    assert!(!result.active_exceeds_enrolled());
}

#[test]
fn test_disabled_lists_are_ignored() {
    let record = ProgramRecord::from_value(json!({
        "sportsEnabled": false,
        "sports": [sport("Basketball", 100, 3.0, 60.0)],
        "paEnabled": true,
        "pa": [pa("Walk", "Group", 30, 5.0, 30.0)]
    }));
    let result = aggregate(&record);
    assert_eq!(result.enrolled_participants, 30);
    assert_eq!(result.active_participants, 30);
    assert!(result.composition.sports_by_type.is_empty());
}

#[test]
fn test_one_on_one_counts_a_single_participant() {
    let record = ProgramRecord::from_value(json!({
        "paEnabled": true,
        "pa": [pa("Coaching", "1 on 1", 25, 3.0, 60.0)]
    }));
    let result = aggregate(&record);
    assert_eq!(result.enrolled_participants, 1);
    assert_eq!(result.active_participants, 1);
}

#[test]
fn test_threshold_is_configurable() {
    let config = ImpactConfig {
        threshold_minutes_per_week: 60.0,
        ..Default::default()
    };
    let result = Aggregator::new(&config).aggregate(&reference_record());
    assert_eq!(result.active_participants, 150);
}

#[test]
fn test_composition_keeps_discovery_order() {
    let record = ProgramRecord::from_value(json!({
        "sportsEnabled": true,
        "sports": [
            sport("Netball", 10, 3.0, 60.0),
            sport("Boccia", 5, 3.0, 60.0),
            sport(" Netball ", 7, 1.0, 30.0)
        ]
    }));
    let result = aggregate(&record);
    let names: Vec<&str> = result
        .composition
        .sports_by_type
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, ["Netball", "Boccia"]);
    assert_eq!(result.composition.sports_by_type[0].value, 17);
}

#[test]
fn test_adding_a_qualifying_instance_never_lowers_totals() {
    let before = aggregate(&reference_record());
    let record = ProgramRecord::from_value(json!({
        "sportsEnabled": true,
        "sports": [
            sport("Basketball", 100, 3.0, 60.0),
            sport("Boccia", 50, 2.0, 40.0),
            sport("Swimming", 12, 4.0, 45.0)
        ]
    }));
    let after = aggregate(&record);
    assert!(after.enrolled_participants >= before.enrolled_participants);
    assert!(after.active_participants >= before.active_participants);
}

#[test]
fn test_aggregating_twice_gives_identical_results() {
    let record = ProgramRecord::from_value(json!({
        "sportsEnabled": true,
        "sports": [sport("Basketball", 100, 3.0, 60.0), sport("Boccia", 50, 2.0, 40.0)],
        "paEnabled": true,
        "pa": [pa("Walk", "Group", 30, 5.0, 30.0), pa("Coaching", "1 on 1", 0, 1.0, 60.0)],
        "inclusive": {"school": 12, "specialNeeds": "3"},
        "enrolledParticipants": 999,
        "participantsMeeting150": 888
    }));
    let first = aggregate(&record);
    let second = aggregate(&record);
    assert_eq!(first, second);
    assert_eq!(first.enrolled_participants, 100 + 50 + 30 + 1 + 15);
}

#[test]
fn test_huge_headcounts_do_not_overflow() {
    let record = ProgramRecord::from_value(json!({
        "sportsEnabled": true,
        "sports": [
            {"participants": 1.0e19, "sessionsPerWeek": 3, "minutesPerSession": 60},
            {"participants": 1.0e19, "sessionsPerWeek": 3, "minutesPerSession": 60}
        ]
    }));
    let result = aggregate(&record);
    assert_eq!(result.enrolled_participants, u64::MAX);
    assert_eq!(result.active_participants, u64::MAX);
}
