//! Annual health impact per disease
//!
//! Combines the participant totals with the disease parameter table:
//! cases prevented, clinical and program NNT, QALYs gained, DALYs avoided
//! and baseline cases. Diseases are treated as independent; no correction
//! is made for people who would have developed more than one.

use log::debug;

use crate::models::disease::DiseaseParameter;
use crate::models::results::{DiseaseResult, ImpactResult, ImpactTotals};

/// Textbook number needed to treat, `1 / (p0 × rrr)`
///
/// `None` when either parameter is absent or non-positive.
#[must_use]
pub fn clinical_nnt(p0: Option<f64>, rrr: Option<f64>) -> Option<f64> {
    let p0 = p0.filter(|p| *p > 0.0)?;
    let rrr = rrr.filter(|r| *r > 0.0)?;
    Some(1.0 / (p0 * rrr))
}

/// Cases prevented per year, `active × p0 × rrr × adherence`
///
/// `None` when `p0` or `rrr` is absent or non-positive; zero when there are
/// no active participants.
#[must_use]
pub fn cases_prevented_per_year(
    active: f64,
    p0: Option<f64>,
    rrr: Option<f64>,
    adherence: f64,
) -> Option<f64> {
    let p0 = p0.filter(|p| *p > 0.0)?;
    let rrr = rrr.filter(|r| *r > 0.0)?;
    if !(active > 0.0) {
        return Some(0.0);
    }
    Some(active * p0 * rrr * adherence)
}

/// Enrolled participants per case prevented
#[must_use]
pub fn program_nnt(enrolled: f64, cases_prevented: Option<f64>) -> Option<f64> {
    cases_prevented
        .filter(|c| *c > 0.0)
        .map(|c| enrolled / c)
}

/// Years lived with disability for one case, `dw × duration`
fn years_lived_with_disability(disease: &DiseaseParameter) -> Option<f64> {
    Some(disease.dw? * disease.duration_years?)
}

/// QALYs lost per incident case
///
/// The fatal term is discounted by the background utility. Zero when the
/// disability weight or duration is missing.
#[must_use]
pub fn qaly_loss_per_case(disease: &DiseaseParameter) -> f64 {
    years_lived_with_disability(disease).map_or(0.0, |yld| {
        yld + disease.case_fatality * disease.life_years_lost_if_death * disease.background_utility
    })
}

/// DALYs per incident case; life-years lost are not quality-weighted
#[must_use]
pub fn daly_per_case(disease: &DiseaseParameter) -> f64 {
    years_lived_with_disability(disease).map_or(0.0, |yld| {
        yld + disease.case_fatality * disease.life_years_lost_if_death
    })
}

/// Impact estimate for a single disease
#[must_use]
pub fn disease_impact(
    disease: &DiseaseParameter,
    active: u64,
    enrolled: u64,
    adherence: f64,
) -> DiseaseResult {
    let active = active as f64;
    let enrolled = enrolled as f64;

    let cases_prevented = cases_prevented_per_year(active, disease.p0, disease.rrr, adherence);
    let qaly_per_case = qaly_loss_per_case(disease);
    let daly_per_case = daly_per_case(disease);

    DiseaseResult {
        key: disease.key,
        label: disease.label,
        clinical_nnt: clinical_nnt(disease.p0, disease.rrr),
        program_nnt: program_nnt(enrolled, cases_prevented),
        cases_prevented,
        qalys_gained: cases_prevented.map(|c| c * qaly_per_case),
        dalys_avoided: cases_prevented.map(|c| c * daly_per_case),
        baseline_cases: enrolled * disease.incidence().unwrap_or(0.0),
    }
}

/// Impact estimates for every disease, with totals
#[must_use]
pub fn compute_impact(
    diseases: &[DiseaseParameter],
    active: u64,
    enrolled: u64,
    adherence: f64,
) -> ImpactResult {
    let rows: Vec<DiseaseResult> = diseases
        .iter()
        .map(|d| disease_impact(d, active, enrolled, adherence))
        .collect();
    let totals = ImpactTotals::from_rows(&rows);

    debug!(
        "Impact for {active} active / {enrolled} enrolled: {:.4} cases, {:.4} QALYs, {:.4} DALYs",
        totals.cases_prevented, totals.qalys_gained, totals.dalys_avoided
    );

    ImpactResult { rows, totals }
}
