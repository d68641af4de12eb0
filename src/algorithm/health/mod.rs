//! Health impact algorithms
//!
//! The disease parameter table, the weekly activity classifier, the
//! per-disease impact formulas and their monetisation.

pub mod classifier;
pub mod diseases;
pub mod impact;
pub mod monetisation;

pub use classifier::{meets_threshold, meets_weekly_minutes};
pub use diseases::{DISEASES, all_diseases, disease_by_key};
pub use impact::{
    cases_prevented_per_year, clinical_nnt, compute_impact, daly_per_case, disease_impact,
    program_nnt, qaly_loss_per_case,
};
pub use monetisation::monetised_benefit_from_qalys;
