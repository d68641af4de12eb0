//! Tests for the weekly activity classifier

use sport_impact::algorithm::health::classifier::meets_weekly_minutes;
use sport_impact::meets_threshold;

#[test]
fn test_guideline_examples() {
    assert!(meets_threshold(3.0, 50.0));
    assert!(!meets_threshold(2.0, 60.0));
    assert!(meets_threshold(5.0, 30.0));
    assert!(!meets_threshold(0.0, 200.0));
}

#[test]
fn test_non_finite_inputs_never_qualify() {
    assert!(!meets_threshold(f64::NAN, 60.0));
    assert!(!meets_threshold(3.0, f64::INFINITY));
    assert!(!meets_threshold(-3.0, -60.0));
}

#[test]
fn test_custom_threshold() {
    assert!(meets_weekly_minutes(2.0, 50.0, 100.0));
    assert!(!meets_weekly_minutes(2.0, 50.0, 101.0));
}
