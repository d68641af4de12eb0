//! Tests for monetisation of health gains

use sport_impact::config::{QALY_VALUE_AUD, QALY_VALUE_AUD_RANGE};
use sport_impact::{ImpactConfig, ImpactTotals, MonetisedBenefit, monetised_benefit_from_qalys};

use crate::utils::assert_close;

#[test]
fn test_reference_value_per_qaly() {
    assert_eq!(QALY_VALUE_AUD, 28_000.0);
    assert_eq!(QALY_VALUE_AUD_RANGE, (20_800.0, 37_700.0));
    assert_close(monetised_benefit_from_qalys(1.5, QALY_VALUE_AUD), 42_000.0);
}

#[test]
fn test_range_scales_the_point_estimate() {
    let totals = ImpactTotals {
        qalys_gained: 2.0,
        dalys_avoided: 2.5,
        ..Default::default()
    };
    let benefit = MonetisedBenefit::from_totals(&totals, &ImpactConfig::default());
    assert_close(benefit.from_qalys, 56_000.0);
    assert_close(benefit.from_dalys, 70_000.0);

    let (low, high) = benefit.range_dollars();
    assert_close(low, 41_600.0);
    assert_close(high, 75_400.0);
    assert_eq!(benefit.currency, "AUD");
}
