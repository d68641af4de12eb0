//! Reading loosely-shaped program records.
//!
//! Program records come from a form whose schema has drifted over time.
//! This module holds the lenient value conversions and the field
//! reconciler used to pull quantities out of them.

pub mod conversions;
pub mod field_rules;
pub mod reconcile;

pub use conversions::{as_finite_number, headcount, is_truthy, number_or_zero};
pub use reconcile::{
    FieldRule, ResolutionSource, Resolved, lookup_path, resolve_number, scan_for_tokens,
};
