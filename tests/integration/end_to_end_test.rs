//! End-to-end tests from a raw record to the rendered report

use serde_json::json;
use sport_impact::algorithm::population::QualitySection;
use sport_impact::{ImpactConfig, ImpactReport, ProgramRecord};

use crate::utils::{assert_close, pa, reference_record, sport};

#[test]
fn test_reference_record_chd_row() {
    let report = ImpactReport::build(&reference_record(), &ImpactConfig::default()).unwrap();
    assert_eq!(report.aggregate.enrolled_participants, 150);
    assert_eq!(report.aggregate.active_participants, 100);

    let chd = report.impact.row("chd").unwrap();
    assert_close(chd.cases_prevented.unwrap(), 0.0875);
    assert!((chd.qalys_gained.unwrap() - 0.0988).abs() < 1e-4);
    assert!((chd.program_nnt.unwrap() - 150.0 / 0.0875).abs() < 1e-6);
    assert!(report.quality.is_clean(), "{:?}", report.quality.issues);
}

#[test]
fn test_zero_enrollment() {
    let report = ImpactReport::build(&ProgramRecord::empty(), &ImpactConfig::default()).unwrap();
    assert_eq!(report.aggregate.enrolled_participants, 0);
    assert_eq!(report.aggregate.active_participants, 0);
    for row in &report.impact.rows {
        assert_eq!(row.program_nnt, None);
        assert_eq!(row.cases_prevented, Some(0.0));
        assert_eq!(row.baseline_cases, 0.0);
    }
    assert_eq!(report.monetised.from_qalys, 0.0);
    assert_eq!(report.quality.issues_in(QualitySection::Global).count(), 1);
}

#[test]
fn test_mixed_programs_with_inclusion() {
    let record = ProgramRecord::from_value(json!({
        "sportsEnabled": true,
        "sports": [sport("Football", 40, 2.0, 90.0)],
        "paEnabled": true,
        "pa": [
            pa("Walking group", "Group", 25, 3.0, 30.0),
            pa("Coaching", "one-on-one", 0, 3.0, 60.0)
        ],
        "inclusion": {"enabled": true, "school": 6, "specialNeeds": "4"}
    }));
    let report = ImpactReport::build(&record, &ImpactConfig::default()).unwrap();
    let agg = &report.aggregate;

    assert_eq!(agg.enrolled_participants, 40 + 25 + 1 + 10);
    assert_eq!(agg.active_participants, 41);
    assert_eq!(agg.inclusion.school, 6);
    assert_eq!(agg.inclusion.special_needs, 4);
    assert_eq!(agg.composition.pa_by_name.len(), 2);

    let text = report.summary();
    assert!(text.contains("Inclusive programs"));
    assert!(text.contains("Walking group 25"));
}

#[test]
fn test_adherence_scales_every_row() {
    let full = ImpactReport::build(&reference_record(), &ImpactConfig::default()).unwrap();
    let config = ImpactConfig {
        adherence: 0.5,
        ..Default::default()
    };
    let half = ImpactReport::build(&reference_record(), &config).unwrap();

    assert_close(
        half.impact.totals.cases_prevented * 2.0,
        full.impact.totals.cases_prevented,
    );
    assert_close(half.impact.totals.baseline_cases, full.impact.totals.baseline_cases);
}

#[test]
fn test_report_serialises_to_json() {
    let report = ImpactReport::build(&reference_record(), &ImpactConfig::default()).unwrap();
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["aggregate"]["enrolled_participants"], 150);
    assert_eq!(value["impact"]["rows"].as_array().unwrap().len(), 8);
    assert_eq!(value["monetised"]["currency"], "AUD");
}
