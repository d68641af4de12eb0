//! Monetisation of health gains
//!
//! Dollars are QALYs times a reference value per QALY (a national
//! cost-effectiveness threshold). One averted DALY is valued as one QALY
//! gained. The uncertainty range is carried for display only.

use crate::config::ImpactConfig;
use crate::models::results::{ImpactTotals, MonetisedBenefit};

/// Dollar value of `qalys` at `value_per_qaly`
#[must_use]
pub fn monetised_benefit_from_qalys(qalys: f64, value_per_qaly: f64) -> f64 {
    qalys * value_per_qaly
}

impl MonetisedBenefit {
    /// Value the impact totals using the configured reference value
    #[must_use]
    pub fn from_totals(totals: &ImpactTotals, config: &ImpactConfig) -> Self {
        let (range_low, range_high) = config.value_per_qaly_range;
        Self {
            from_qalys: monetised_benefit_from_qalys(totals.qalys_gained, config.value_per_qaly),
            from_dalys: monetised_benefit_from_qalys(totals.dalys_avoided, config.value_per_qaly),
            value_per_qaly: config.value_per_qaly,
            range_low,
            range_high,
            currency: config.currency.clone(),
        }
    }

    /// QALY-based dollars re-evaluated at another value per QALY
    #[must_use]
    pub fn dollars_at(&self, value_per_qaly: f64) -> f64 {
        if self.value_per_qaly == 0.0 {
            return 0.0;
        }
        self.from_qalys / self.value_per_qaly * value_per_qaly
    }

    /// QALY-based dollars at the low and high ends of the range
    #[must_use]
    pub fn range_dollars(&self) -> (f64, f64) {
        (self.dollars_at(self.range_low), self.dollars_at(self.range_high))
    }
}
