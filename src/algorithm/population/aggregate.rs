//! Participant aggregation
//!
//! Reduces a program record to enrolled and active participant totals,
//! inclusion headcounts and composition breakdowns.
//!
//! Enrolled participants measure reach: everyone counted in an enabled list
//! plus the inclusion headcount. Active participants are those whose program
//! instance reaches the weekly activity guideline; inclusion headcounts are
//! never assessed against it.

use log::{debug, info};
use serde_json::Value;

use crate::algorithm::health::classifier::meets_weekly_minutes;
use crate::algorithm::population::composition::build_composition;
use crate::config::{FallbackPolicy, ImpactConfig};
use crate::models::program::{ActivityProgram, ProgramRecord};
use crate::models::results::{AggregateResult, InclusionSummary, TotalsProvenance};
use crate::schema::conversions::{headcount, is_truthy};
use crate::schema::field_rules::{
    INCLUSION_TOGGLES, LEGACY_ACTIVE, LEGACY_ENROLLED, SCHOOL_DISABILITY, SPECIAL_NEEDS,
};
use crate::schema::reconcile::lookup_path;

/// Enrolled and active participants of one list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    /// Participants counted
    pub enrolled: u64,
    /// Participants in instances meeting the threshold
    pub active: u64,
}

/// Count participants of `items`, marking those meeting `threshold` minutes/week
#[must_use]
pub fn tally<T: ActivityProgram>(items: &[T], threshold: f64) -> Tally {
    items.iter().fold(Tally::default(), |mut acc, item| {
        let counted = item.counted_participants();
        acc.enrolled = acc.enrolled.saturating_add(counted);
        if meets_weekly_minutes(item.sessions_per_week(), item.minutes_per_session(), threshold) {
            acc.active = acc.active.saturating_add(counted);
        }
        acc
    })
}

/// Resolve the inclusion headcounts from any known record shape
#[must_use]
pub fn resolve_inclusion(raw: &Value) -> InclusionSummary {
    let school = headcount(SCHOOL_DISABILITY.value_or_zero(raw));
    let special_needs = headcount(SPECIAL_NEEDS.value_or_zero(raw));
    let total = school.saturating_add(special_needs);

    let toggled = INCLUSION_TOGGLES
        .iter()
        .any(|path| is_truthy(lookup_path(raw, path)));

    InclusionSummary {
        enabled: total > 0 || toggled,
        school,
        special_needs,
        total,
    }
}

/// Reduces program records to participant totals
#[derive(Debug, Clone)]
pub struct Aggregator<'c> {
    config: &'c ImpactConfig,
}

impl<'c> Aggregator<'c> {
    /// Create an aggregator using `config`
    #[must_use]
    pub fn new(config: &'c ImpactConfig) -> Self {
        Self { config }
    }

    /// Aggregate a program record
    #[must_use]
    pub fn aggregate(&self, record: &ProgramRecord) -> AggregateResult {
        let threshold = self.config.threshold_minutes_per_week;
        let sports = tally(record.enabled_sports(), threshold);
        let pa = tally(record.enabled_pa(), threshold);
        debug!(
            "Sports: {} enrolled / {} active, PA: {} enrolled / {} active",
            sports.enrolled, sports.active, pa.enrolled, pa.active
        );

        let mut enrolled = sports.enrolled.saturating_add(pa.enrolled);
        let mut active = sports.active.saturating_add(pa.active);
        let mut provenance = TotalsProvenance::default();

        let raw = record.raw();
        let use_enrolled_fallback;
        let use_active_fallback;
        match self.config.fallback_policy {
            FallbackPolicy::WhenBothZero => {
                let both_zero = enrolled == 0 && active == 0;
                use_enrolled_fallback = both_zero;
                use_active_fallback = both_zero;
            }
            FallbackPolicy::PerTotal => {
                use_enrolled_fallback = enrolled == 0;
                use_active_fallback = active == 0;
            }
        }

        if use_enrolled_fallback {
            if let Some(resolved) = LEGACY_ENROLLED.resolve(raw) {
                enrolled = headcount(resolved.value);
                provenance.enrolled_from_legacy = true;
                info!("Enrolled participants taken from legacy field: {:?}", resolved.source);
            }
        }
        if use_active_fallback {
            if let Some(resolved) = LEGACY_ACTIVE.resolve(raw) {
                active = headcount(resolved.value);
                provenance.active_from_legacy = true;
                info!("Active participants taken from legacy field: {:?}", resolved.source);
            }
        }

        let inclusion = resolve_inclusion(raw);
        enrolled = enrolled.saturating_add(inclusion.total);

        if self.config.clamp_active_to_enrolled && active > enrolled {
            debug!("Clamping active participants {active} to enrolled {enrolled}");
            active = enrolled;
            provenance.active_clamped = true;
        }

        AggregateResult {
            enrolled_participants: enrolled,
            active_participants: active,
            inclusion,
            composition: build_composition(record.enabled_sports(), record.enabled_pa()),
            provenance,
        }
    }
}

/// Aggregate a program record with the default configuration
#[must_use]
pub fn aggregate(record: &ProgramRecord) -> AggregateResult {
    let config = ImpactConfig::default();
    Aggregator::new(&config).aggregate(record)
}
