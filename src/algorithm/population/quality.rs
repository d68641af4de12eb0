//! Data-quality assessment of program records
//!
//! Mirrors the checks the data-entry form runs before showing results, but
//! never blocks the computation: every finding is a warning attached to the
//! report.

use std::fmt;

use log::warn;
use serde::Serialize;

use crate::models::program::{PaMode, ProgramRecord};
use crate::models::results::AggregateResult;

/// Part of the record an issue refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QualitySection {
    /// The record as a whole
    Global,
    /// Sports programs
    Sports,
    /// Structured physical-activity programs
    Pa,
    /// Inclusion headcounts
    Inclusive,
}

impl fmt::Display for QualitySection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Global => "global",
            Self::Sports => "sports",
            Self::Pa => "physical activity",
            Self::Inclusive => "inclusive",
        };
        write!(f, "{name}")
    }
}

/// A single data-quality finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualityIssue {
    /// Section the finding belongs to
    pub section: QualitySection,
    /// Human-readable description
    pub message: String,
}

impl QualityIssue {
    fn new(section: QualitySection, message: impl Into<String>) -> Self {
        Self {
            section,
            message: message.into(),
        }
    }
}

/// All findings for one record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct QualityReport {
    /// Findings in check order
    pub issues: Vec<QualityIssue>,
}

impl QualityReport {
    /// Whether nothing was found
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Findings for one section
    pub fn issues_in(&self, section: QualitySection) -> impl Iterator<Item = &QualityIssue> {
        self.issues.iter().filter(move |i| i.section == section)
    }
}

fn has_text(value: Option<&String>) -> bool {
    value.is_some_and(|s| !s.trim().is_empty())
}

/// Check a record and its aggregate for incomplete or inconsistent data
#[must_use]
pub fn assess_quality(record: &ProgramRecord, aggregate: &AggregateResult) -> QualityReport {
    let mut issues = Vec::new();
    let inclusion = &aggregate.inclusion;

    let has_sports = record.sports_enabled && !record.sports.is_empty();
    let has_pa = record.pa_enabled && !record.pa.is_empty();
    let has_legacy = aggregate.provenance.enrolled_from_legacy || aggregate.provenance.active_from_legacy;
    if !has_sports && !has_pa && inclusion.total == 0 && !has_legacy {
        issues.push(QualityIssue::new(
            QualitySection::Global,
            "No program or inclusive participant data entered",
        ));
    }

    if record.sports_enabled {
        if record.sports.is_empty() {
            issues.push(QualityIssue::new(
                QualitySection::Sports,
                "Sports programs are enabled but none were added",
            ));
        }
        for (i, s) in record.sports.iter().enumerate() {
            let complete = has_text(s.type_of_sport.as_ref())
                && s.participants > 0
                && has_text(s.location.as_ref())
                && s.sessions_per_week > 0.0
                && s.minutes_per_session > 0.0;
            if !complete {
                issues.push(QualityIssue::new(
                    QualitySection::Sports,
                    format!("Sport program {} is missing values", i + 1),
                ));
            }
        }
    }

    if record.pa_enabled {
        if record.pa.is_empty() {
            issues.push(QualityIssue::new(
                QualitySection::Pa,
                "Physical activity programs are enabled but none were added",
            ));
        }
        for (i, p) in record.pa.iter().enumerate() {
            let participants_ok = p.mode == PaMode::OneOnOne || p.participants > 0;
            let complete = has_text(p.name.as_ref())
                && p.mode != PaMode::Unspecified
                && has_text(p.location.as_ref())
                && p.sessions_per_week > 0.0
                && p.minutes_per_session > 0.0
                && participants_ok;
            if !complete {
                issues.push(QualityIssue::new(
                    QualitySection::Pa,
                    format!("Physical activity program {} is missing values", i + 1),
                ));
            }
        }
    }

    if inclusion.enabled && inclusion.total == 0 {
        issues.push(QualityIssue::new(
            QualitySection::Inclusive,
            "Inclusive programs are enabled but no participants were entered",
        ));
    }

    if aggregate.active_exceeds_enrolled() {
        issues.push(QualityIssue::new(
            QualitySection::Global,
            format!(
                "Active participants ({}) exceed enrolled participants ({})",
                aggregate.active_participants, aggregate.enrolled_participants
            ),
        ));
    }

    for issue in &issues {
        warn!("Data quality ({}): {}", issue.section, issue.message);
    }

    QualityReport { issues }
}
