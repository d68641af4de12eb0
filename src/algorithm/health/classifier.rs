//! Weekly activity threshold classification

use crate::config::GUIDELINE_MINUTES_PER_WEEK;

/// Whether a program instance reaches the 150 minutes/week guideline
///
/// Non-positive or non-finite inputs never meet the threshold.
#[must_use]
pub fn meets_threshold(sessions_per_week: f64, minutes_per_session: f64) -> bool {
    meets_weekly_minutes(sessions_per_week, minutes_per_session, GUIDELINE_MINUTES_PER_WEEK)
}

/// Whether sessions × minutes reaches `threshold` minutes per week
#[must_use]
pub fn meets_weekly_minutes(sessions_per_week: f64, minutes_per_session: f64, threshold: f64) -> bool {
    sessions_per_week.is_finite()
        && minutes_per_session.is_finite()
        && sessions_per_week > 0.0
        && minutes_per_session > 0.0
        && sessions_per_week * minutes_per_session >= threshold
}
