//! Configuration for the impact engine.

use serde::Deserialize;

use crate::error::{ImpactError, Result};

/// Reference value of one QALY in Australian dollars
pub const QALY_VALUE_AUD: f64 = 28_000.0;

/// 95% uncertainty range around [`QALY_VALUE_AUD`], for display only
pub const QALY_VALUE_AUD_RANGE: (f64, f64) = (20_800.0, 37_700.0);

/// Weekly activity guideline in minutes of moderate activity
pub const GUIDELINE_MINUTES_PER_WEEK: f64 = 150.0;

/// When the legacy top-level participant fields replace the structured totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum FallbackPolicy {
    /// Fall back only when both enrolled and active are zero after the lists
    #[default]
    WhenBothZero,
    /// Enrolled and active each fall back on their own when zero
    PerTotal,
}

/// Configuration for an impact computation
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImpactConfig {
    /// Minutes per week a program instance must reach to count as active
    pub threshold_minutes_per_week: f64,
    /// Share of active participants who keep up the activity, in (0, 1]
    pub adherence: f64,
    /// Monetary value of one QALY (or one averted DALY)
    pub value_per_qaly: f64,
    /// Uncertainty range around `value_per_qaly`
    pub value_per_qaly_range: (f64, f64),
    /// Currency code shown next to monetised values
    pub currency: String,
    /// Legacy field fallback behaviour
    pub fallback_policy: FallbackPolicy,
    /// Cap active participants at the enrolled count
    pub clamp_active_to_enrolled: bool,
}

impl Default for ImpactConfig {
    fn default() -> Self {
        Self {
            threshold_minutes_per_week: GUIDELINE_MINUTES_PER_WEEK,
            adherence: 1.0,
            value_per_qaly: QALY_VALUE_AUD,
            value_per_qaly_range: QALY_VALUE_AUD_RANGE,
            currency: "AUD".to_string(),
            fallback_policy: FallbackPolicy::default(),
            clamp_active_to_enrolled: false,
        }
    }
}

impl ImpactConfig {
    /// Reject configurations the formulas cannot use
    pub fn validate(&self) -> Result<()> {
        if !self.threshold_minutes_per_week.is_finite() || self.threshold_minutes_per_week <= 0.0 {
            return Err(ImpactError::InvalidConfig(format!(
                "threshold_minutes_per_week must be positive, got {}",
                self.threshold_minutes_per_week
            )));
        }

        if !(self.adherence > 0.0 && self.adherence <= 1.0) {
            return Err(ImpactError::InvalidConfig(format!(
                "adherence must be in (0, 1], got {}",
                self.adherence
            )));
        }

        if !self.value_per_qaly.is_finite() || self.value_per_qaly < 0.0 {
            return Err(ImpactError::InvalidConfig(format!(
                "value_per_qaly must be a non-negative amount, got {}",
                self.value_per_qaly
            )));
        }

        let (low, high) = self.value_per_qaly_range;
        if !(low <= self.value_per_qaly && self.value_per_qaly <= high) {
            return Err(ImpactError::InvalidConfig(format!(
                "value_per_qaly {} lies outside its range {low}..={high}",
                self.value_per_qaly
            )));
        }

        Ok(())
    }
}
