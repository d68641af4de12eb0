//! Domain models for the impact engine
//!
//! Input records produced by the data-entry form, the static disease
//! parameters, and the derived result sets handed to presentation.

pub mod disease;
pub mod program;
pub mod results;

// Re-export commonly used types
pub use disease::DiseaseParameter;
pub use program::{ActivityProgram, PaMode, PaProgram, ProgramRecord, SportProgram};
pub use results::{
    AggregateResult, Composition, CompositionEntry, DiseaseResult, ImpactResult, ImpactTotals,
    InclusionSummary, MonetisedBenefit, TotalsProvenance,
};
