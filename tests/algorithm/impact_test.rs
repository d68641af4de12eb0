//! Tests for the per-disease impact formulas

use sport_impact::algorithm::health::disease_by_key;
use sport_impact::{
    DISEASES, DiseaseParameter, all_diseases, cases_prevented_per_year, clinical_nnt,
    compute_impact,
};

use crate::utils::assert_close;

#[test]
fn test_type_2_diabetes_reference_values() {
    let nnt = clinical_nnt(Some(0.0040), Some(0.30)).unwrap();
    assert!((nnt - 833.33).abs() < 0.01);

    let cases = cases_prevented_per_year(1000.0, Some(0.0040), Some(0.30), 1.0).unwrap();
    assert_close(cases, 1.2);
}

#[test]
fn test_disease_table_is_complete() {
    assert_eq!(all_diseases().len(), DISEASES.len());
    for disease in all_diseases() {
        assert!(disease.p0.is_some_and(|p| p > 0.0 && p < 1.0), "{}", disease.key);
        assert!(disease.rrr.is_some_and(|r| r > 0.0 && r < 1.0), "{}", disease.key);
        assert!(disease_by_key(disease.key).is_some());
    }
    assert!(disease_by_key("not-a-disease").is_none());
}

#[test]
fn test_zero_active_prevents_nothing() {
    let result = compute_impact(all_diseases(), 0, 200, 1.0);
    for row in &result.rows {
        assert_eq!(row.cases_prevented, Some(0.0));
        assert_eq!(row.program_nnt, None);
        assert!(row.clinical_nnt.is_some());
    }
    assert_eq!(result.totals.cases_prevented, 0.0);
    assert!(result.totals.baseline_cases > 0.0);
}

#[test]
fn test_impact_is_monotonic_in_active_participants() {
    let mut previous = compute_impact(all_diseases(), 0, 10_000, 1.0);
    for active in [1_u64, 10, 100, 1_000, 10_000] {
        let current = compute_impact(all_diseases(), active, 10_000, 1.0);
        assert!(current.totals.cases_prevented >= previous.totals.cases_prevented);
        assert!(current.totals.qalys_gained >= previous.totals.qalys_gained);
        assert!(current.totals.dalys_avoided >= previous.totals.dalys_avoided);

        for (now, before) in current.rows.iter().zip(&previous.rows) {
            assert_eq!(now.key, before.key);
            assert!(now.cases_prevented.unwrap() >= before.cases_prevented.unwrap());
            assert!(now.qalys_gained.unwrap() >= before.qalys_gained.unwrap());
            assert!(now.dalys_avoided.unwrap() >= before.dalys_avoided.unwrap());
        }
        previous = current;
    }
}

#[test]
fn test_compute_impact_is_idempotent() {
    let first = compute_impact(all_diseases(), 321, 654, 0.8);
    let second = compute_impact(all_diseases(), 321, 654, 0.8);
    assert_eq!(first, second);
}

#[test]
fn test_totals_skip_unavailable_rows() {
    let mut incomplete = DiseaseParameter::new("x", "Unknown risk", 0.01, 0.2);
    incomplete.p0 = None;
    let chd = *disease_by_key("chd").unwrap();

    let result = compute_impact(&[chd, incomplete], 100, 150, 1.0);
    let row = result.row("x").unwrap();
    assert_eq!(row.cases_prevented, None);
    assert_close(result.totals.cases_prevented, 0.0875);
}
