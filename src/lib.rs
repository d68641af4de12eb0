//! A Rust library for estimating the annual health and economic impact of
//! sport and physical-activity programs.
//!
//! Program records produced by a data-entry form are reduced to enrolled and
//! active participant totals, combined with a table of chronic-disease
//! parameters to estimate cases prevented, QALYs gained and DALYs avoided,
//! and finally monetised.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod report;
pub mod schema;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{FallbackPolicy, ImpactConfig};
pub use error::{ImpactError, Result};
pub use models::{
    AggregateResult, DiseaseParameter, DiseaseResult, ImpactResult, ImpactTotals,
    MonetisedBenefit, PaMode, PaProgram, ProgramRecord, SportProgram,
};
pub use report::ImpactReport;

// Computation entry points
pub use algorithm::health::{
    DISEASES, all_diseases, cases_prevented_per_year, clinical_nnt, compute_impact,
    meets_threshold, monetised_benefit_from_qalys,
};
pub use algorithm::population::{Aggregator, aggregate, assess_quality};

// Field reconciliation
pub use schema::{resolve_number, scan_for_tokens};

// Loading
pub use loader::{load_program_record, parse_program_record};
