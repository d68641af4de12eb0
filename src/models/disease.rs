//! Disease parameter model

use serde::Serialize;

/// Population quality-of-life index applied to life-years lost
pub const DEFAULT_BACKGROUND_UTILITY: f64 = 0.88;

/// Epidemiological constants for one chronic disease
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiseaseParameter {
    /// Stable identifier
    pub key: &'static str,
    /// Display name
    pub label: &'static str,
    /// Annual baseline incidence probability per person
    pub p0: Option<f64>,
    /// Relative risk reduction from meeting the activity guideline
    pub rrr: Option<f64>,
    /// Disability weight of an incident case
    pub dw: Option<f64>,
    /// Average years a case remains disabling
    pub duration_years: Option<f64>,
    /// Probability an incident case is fatal
    pub case_fatality: f64,
    /// Expected remaining life-years lost if fatal
    pub life_years_lost_if_death: f64,
    /// Quality-of-life index for the remaining life
    pub background_utility: f64,
}

impl DiseaseParameter {
    /// Disease with incidence and risk reduction only; burden terms are zero
    #[must_use]
    pub const fn new(key: &'static str, label: &'static str, p0: f64, rrr: f64) -> Self {
        Self {
            key,
            label,
            p0: Some(p0),
            rrr: Some(rrr),
            dw: None,
            duration_years: None,
            case_fatality: 0.0,
            life_years_lost_if_death: 0.0,
            background_utility: DEFAULT_BACKGROUND_UTILITY,
        }
    }

    /// Attach the burden-of-disease terms
    #[must_use]
    pub const fn with_burden(
        mut self,
        dw: f64,
        duration_years: f64,
        case_fatality: f64,
        life_years_lost_if_death: f64,
    ) -> Self {
        self.dw = Some(dw);
        self.duration_years = Some(duration_years);
        self.case_fatality = case_fatality;
        self.life_years_lost_if_death = life_years_lost_if_death;
        self
    }

    /// Baseline incidence, if present and positive
    #[must_use]
    pub fn incidence(&self) -> Option<f64> {
        self.p0.filter(|p| p.is_finite() && *p > 0.0)
    }

    /// Relative risk reduction, if present and positive
    #[must_use]
    pub fn risk_reduction(&self) -> Option<f64> {
        self.rrr.filter(|r| r.is_finite() && *r > 0.0)
    }

    /// Absolute annual risk reduction `p0 × rrr`, when both are usable
    #[must_use]
    pub fn absolute_risk_reduction(&self) -> Option<f64> {
        Some(self.incidence()? * self.risk_reduction()?)
    }
}
