//! Participant aggregation and data-quality checks
//!
//! This module turns a program record into participant totals and
//! composition breakdowns, and flags records that look incomplete.

pub mod aggregate;
pub mod composition;
pub mod quality;

pub use aggregate::{Aggregator, Tally, aggregate, resolve_inclusion, tally};
pub use composition::{build_composition, group_sum};
pub use quality::{QualityIssue, QualityReport, QualitySection, assess_quality};
