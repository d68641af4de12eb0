//! Utility functions shared by the report renderers

pub mod format;

pub use format::{NOT_AVAILABLE, fmt_int, fmt_money, fmt_num};
