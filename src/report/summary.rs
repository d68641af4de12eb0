//! Plain-text rendering of an impact report

use itertools::Itertools;

use crate::models::results::{CompositionEntry, InclusionSummary};
use crate::report::ImpactReport;
use crate::utils::format::{NOT_AVAILABLE, fmt_int, fmt_money, fmt_num};

fn composition_line(entries: &[CompositionEntry]) -> String {
    if entries.is_empty() {
        return "no data".to_string();
    }
    entries
        .iter()
        .map(|e| format!("{} {}", e.name, e.value))
        .join(", ")
}

impl ImpactReport {
    /// Render the report as a text table
    #[must_use]
    pub fn summary(&self) -> String {
        let agg = &self.aggregate;
        let totals = &self.impact.totals;
        let money = &self.monetised;

        let mut summary = String::new();
        summary.push_str("Annual Impact Summary:\n");
        summary.push_str(&format!(
            "  Enrolled: {}  Active (>=150 min/wk): {}\n",
            fmt_int(Some(agg.enrolled_participants as f64)),
            fmt_int(Some(agg.active_participants as f64))
        ));

        summary.push_str("\nAnnual impact by disease:\n");
        summary.push_str(&format!(
            "  {:<34} {:>10} {:>12} {:>10} {:>10} {:>10}\n",
            "Disease", "NNT", "Program NNT", "Cases/yr", "QALYs/yr", "DALYs/yr"
        ));
        for row in &self.impact.rows {
            summary.push_str(&format!(
                "  {:<34} {:>10} {:>12} {:>10} {:>10} {:>10}\n",
                row.label,
                fmt_num(row.clinical_nnt, 1),
                fmt_num(row.program_nnt, 1),
                fmt_num(row.cases_prevented, 2),
                fmt_num(row.qalys_gained, 2),
                fmt_num(row.dalys_avoided, 2)
            ));
        }
        summary.push_str(&format!(
            "  {:<34} {:>10} {:>12} {:>10} {:>10} {:>10}\n",
            "Total",
            NOT_AVAILABLE,
            NOT_AVAILABLE,
            fmt_num(Some(totals.cases_prevented), 2),
            fmt_num(Some(totals.qalys_gained), 2),
            fmt_num(Some(totals.dalys_avoided), 2)
        ));
        summary.push_str(&format!(
            "  Baseline cases among enrolled: {}\n",
            fmt_num(Some(totals.baseline_cases), 2)
        ));

        summary.push_str("\nMonetised health benefit:\n");
        summary.push_str(&format!(
            "  Value per QALY: {} (range {}-{})\n",
            fmt_money(Some(money.value_per_qaly), &money.currency),
            fmt_money(Some(money.range_low), &money.currency),
            fmt_money(Some(money.range_high), &money.currency)
        ));
        summary.push_str(&format!(
            "  Dollars saved (from QALYs): {}\n",
            fmt_money(Some(money.from_qalys), &money.currency)
        ));
        summary.push_str(&format!(
            "  Dollars saved (from DALYs): {}\n",
            fmt_money(Some(money.from_dalys), &money.currency)
        ));

        let comp = &agg.composition;
        if !comp.is_empty() {
            summary.push_str("\nProgram composition (participants):\n");
            summary.push_str(&format!(
                "  Sports by type: {}\n",
                composition_line(&comp.sports_by_type)
            ));
            summary.push_str(&format!(
                "  Sports by location: {}\n",
                composition_line(&comp.sports_by_location)
            ));
            summary.push_str(&format!("  PA by program: {}\n", composition_line(&comp.pa_by_name)));
            summary.push_str(&format!(
                "  PA by location: {}\n",
                composition_line(&comp.pa_by_location)
            ));
        }

        let inclusion = &agg.inclusion;
        if inclusion.enabled {
            summary.push_str("\nInclusive programs:\n");
            summary.push_str(&format!(
                "  School (participants with disability): {} ({:.1}% of enrolled)\n",
                inclusion.school,
                InclusionSummary::share_of_enrolled(inclusion.school, agg.enrolled_participants)
            ));
            summary.push_str(&format!(
                "  Special needs: {} ({:.1}% of enrolled)\n",
                inclusion.special_needs,
                InclusionSummary::share_of_enrolled(inclusion.special_needs, agg.enrolled_participants)
            ));
        }

        if !self.quality.is_clean() {
            summary.push_str("\nData quality warnings:\n");
            for issue in &self.quality.issues {
                summary.push_str(&format!("  - [{}] {}\n", issue.section, issue.message));
            }
        }

        summary
    }
}
