//! End-to-end impact report
//!
//! Runs the full pipeline for one program record: aggregation, per-disease
//! impact, totals, monetisation and data-quality checks. The resulting
//! value is what the presentation layer (tables, charts, PDF export)
//! consumes.

pub mod summary;

use log::info;
use serde::Serialize;

use crate::algorithm::health::diseases::all_diseases;
use crate::algorithm::health::impact::compute_impact;
use crate::algorithm::population::aggregate::Aggregator;
use crate::algorithm::population::quality::{QualityReport, assess_quality};
use crate::config::ImpactConfig;
use crate::error::Result;
use crate::models::disease::DiseaseParameter;
use crate::models::program::ProgramRecord;
use crate::models::results::{AggregateResult, ImpactResult, MonetisedBenefit};

/// Everything computed for one program record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactReport {
    /// Participant totals, inclusion and composition
    pub aggregate: AggregateResult,
    /// Per-disease rows and totals
    pub impact: ImpactResult,
    /// Dollar value of the totals
    pub monetised: MonetisedBenefit,
    /// Non-fatal data-quality findings
    pub quality: QualityReport,
}

impl ImpactReport {
    /// Build the report against the built-in disease table
    pub fn build(record: &ProgramRecord, config: &ImpactConfig) -> Result<Self> {
        Self::build_with_diseases(record, config, all_diseases())
    }

    /// Build the report against a custom disease table
    pub fn build_with_diseases(
        record: &ProgramRecord,
        config: &ImpactConfig,
        diseases: &[DiseaseParameter],
    ) -> Result<Self> {
        config.validate()?;

        let aggregate = Aggregator::new(config).aggregate(record);
        let impact = compute_impact(
            diseases,
            aggregate.active_participants,
            aggregate.enrolled_participants,
            config.adherence,
        );
        let monetised = MonetisedBenefit::from_totals(&impact.totals, config);
        let quality = assess_quality(record, &aggregate);

        info!(
            "Impact report: {} enrolled, {} active, {:.2} QALYs gained, {} quality issue(s)",
            aggregate.enrolled_participants,
            aggregate.active_participants,
            impact.totals.qalys_gained,
            quality.issues.len()
        );

        Ok(Self {
            aggregate,
            impact,
            monetised,
            quality,
        })
    }
}
