//! Fixed-layout text rendering of a monthly report.
//!
//! Every field of [`MonthlyReport`] appears unmodified in value; the export
//! never recomputes anything, so two renders of the same report are
//! byte-identical.

use crate::models::expense::format_cents;
use crate::services::report::MonthlyReport;

const PAGE_WIDTH: usize = 72;

pub fn render_report(report: &MonthlyReport) -> String {
    let rule = "-".repeat(PAGE_WIDTH);
    let mut doc = String::new();

    doc.push_str(&format!("FinTrack Report: {}\n\n", report.month));
    doc.push_str(&format!("Financial Grade: {}\n", report.grade));
    doc.push_str(&format!("Status: {}\n", report.title));
    doc.push_str(&rule);
    doc.push('\n');
    doc.push_str(&format!(
        "{:<36}{}\n",
        format!("Total Spent: {}", format_cents(report.spent_cents)),
        format!("Remaining Budget: {}", format_cents(report.remaining_cents)),
    ));
    doc.push_str(&format!(
        "{:<36}{}\n",
        format!("Highest Spending: {}", report.top_category),
        format!("Wants Spending: {}", format_cents(report.wants_total_cents)),
    ));
    doc.push('\n');
    doc.push_str("Suggestion:\n");
    doc.push_str(&format!("{}\n", report.advice));
    doc.push('\n');
    doc.push_str(&rule);
    doc.push('\n');
    doc.push_str("Generated by FinTrack\n");

    doc
}
