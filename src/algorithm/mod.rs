//! Algorithm implementations for the impact engine
//!
//! Population-side aggregation of program records and the health-side
//! impact formulas.

pub mod health;
pub mod population;
