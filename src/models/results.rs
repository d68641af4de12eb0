//! Derived result models
//!
//! These are recomputed from a program record on every pass and handed to
//! the presentation layer read-only. Values that cannot be computed are
//! `None` and serialize as `null`.

use serde::Serialize;

/// Summed participants for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompositionEntry {
    /// Category name (sport type, location or program name)
    pub name: String,
    /// Participants in the category
    pub value: u64,
}

impl CompositionEntry {
    /// Create a new entry
    #[must_use]
    pub fn new(name: impl Into<String>, value: u64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Participant breakdowns, each ordered by first appearance
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Composition {
    /// Sports participants by type of sport
    pub sports_by_type: Vec<CompositionEntry>,
    /// Sports participants by location
    pub sports_by_location: Vec<CompositionEntry>,
    /// Physical-activity participants by program name
    pub pa_by_name: Vec<CompositionEntry>,
    /// Physical-activity participants by location
    pub pa_by_location: Vec<CompositionEntry>,
}

impl Composition {
    /// Whether every breakdown is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sports_by_type.is_empty()
            && self.sports_by_location.is_empty()
            && self.pa_by_name.is_empty()
            && self.pa_by_location.is_empty()
    }
}

/// Inclusion headcounts (schools and special needs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct InclusionSummary {
    /// Whether the block is switched on or carries any headcount
    pub enabled: bool,
    /// School participants with disability
    pub school: u64,
    /// Special-needs participants
    pub special_needs: u64,
    /// Sum of both headcounts
    pub total: u64,
}

impl InclusionSummary {
    /// Share of `enrolled` represented by `count`, in percent clamped to 0..=100
    #[must_use]
    pub fn share_of_enrolled(count: u64, enrolled: u64) -> f64 {
        if enrolled == 0 {
            return 0.0;
        }
        (count as f64 / enrolled as f64 * 100.0).clamp(0.0, 100.0)
    }
}

/// Which path produced the enrolled and active totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TotalsProvenance {
    /// Enrolled came from legacy top-level fields
    pub enrolled_from_legacy: bool,
    /// Active came from legacy top-level fields
    pub active_from_legacy: bool,
    /// Active was capped at enrolled
    pub active_clamped: bool,
}

/// Participant totals and breakdowns for one program record
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AggregateResult {
    /// All counted participants, inclusion headcount included
    pub enrolled_participants: u64,
    /// Participants in program instances meeting the weekly guideline
    pub active_participants: u64,
    /// Inclusion headcounts
    pub inclusion: InclusionSummary,
    /// Participant breakdowns
    pub composition: Composition,
    /// How the totals were obtained
    pub provenance: TotalsProvenance,
}

impl AggregateResult {
    /// Whether active exceeds enrolled, which signals inconsistent input
    #[must_use]
    pub fn active_exceeds_enrolled(&self) -> bool {
        self.active_participants > self.enrolled_participants
    }
}

/// Annual impact estimate for one disease
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiseaseResult {
    /// Disease identifier
    pub key: &'static str,
    /// Display name
    pub label: &'static str,
    /// Textbook number needed to treat, `1 / (p0 × rrr)`
    pub clinical_nnt: Option<f64>,
    /// Enrolled participants per case prevented
    pub program_nnt: Option<f64>,
    /// Cases prevented per year
    pub cases_prevented: Option<f64>,
    /// QALYs gained per year
    pub qalys_gained: Option<f64>,
    /// DALYs avoided per year
    pub dalys_avoided: Option<f64>,
    /// Cases expected among enrolled participants without the program
    pub baseline_cases: f64,
}

/// Disease-wise sums
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ImpactTotals {
    /// Total cases prevented per year
    pub cases_prevented: f64,
    /// Total QALYs gained per year
    pub qalys_gained: f64,
    /// Total DALYs avoided per year
    pub dalys_avoided: f64,
    /// Total baseline cases
    pub baseline_cases: f64,
}

impl ImpactTotals {
    /// Sum the rows, skipping unavailable values
    #[must_use]
    pub fn from_rows(rows: &[DiseaseResult]) -> Self {
        rows.iter().fold(Self::default(), |mut acc, row| {
            acc.cases_prevented += row.cases_prevented.unwrap_or(0.0);
            acc.qalys_gained += row.qalys_gained.unwrap_or(0.0);
            acc.dalys_avoided += row.dalys_avoided.unwrap_or(0.0);
            acc.baseline_cases += row.baseline_cases;
            acc
        })
    }
}

/// Per-disease rows with their totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactResult {
    /// One row per disease, in table order
    pub rows: Vec<DiseaseResult>,
    /// Disease-wise sums
    pub totals: ImpactTotals,
}

impl ImpactResult {
    /// Row for a disease key
    #[must_use]
    pub fn row(&self, key: &str) -> Option<&DiseaseResult> {
        self.rows.iter().find(|r| r.key == key)
    }
}

/// Dollar value of the health gains
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonetisedBenefit {
    /// Total QALYs gained × value per QALY
    pub from_qalys: f64,
    /// Total DALYs avoided × value per QALY
    pub from_dalys: f64,
    /// Reference value of one QALY
    pub value_per_qaly: f64,
    /// Lower end of the reference value's range
    pub range_low: f64,
    /// Upper end of the reference value's range
    pub range_high: f64,
    /// Currency code
    pub currency: String,
}
