//! Monthly report: current-month aggregation, category ranking and the
//! rule-based grade ladder.
//!
//! A pure function of the snapshot. Calling it twice with the same inputs
//! yields field-for-field identical output, so the export layer can safely
//! re-derive it.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::Expense;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyReport {
    /// Full month name of the reporting month, e.g. "August".
    pub month: String,
    pub spent_cents: i64,
    pub remaining_cents: i64,
    pub percentage_used: f64,
    pub top_category: String,
    pub wants_total_cents: i64,
    pub needs_total_cents: i64,
    pub grade: &'static str,
    pub title: &'static str,
    pub advice: String,
}

impl MonthlyReport {
    pub fn compute(expenses: &[Expense], budget_cents: i64, today: NaiveDate) -> Self {
        let monthly: Vec<&Expense> = expenses
            .iter()
            .filter(|e| {
                e.created_date()
                    .map(|d| d.year() == today.year() && d.month() == today.month())
                    .unwrap_or(false)
            })
            .collect();

        let spent: i64 = monthly.iter().map(|e| e.amount_cents.max(0)).sum();
        let percent = if budget_cents > 0 {
            (spent as f64 / budget_cents as f64) * 100.0
        } else {
            0.0
        };

        let mut category_totals: HashMap<&str, i64> = HashMap::new();
        for expense in &monthly {
            *category_totals.entry(expense.category.as_str()).or_insert(0) +=
                expense.amount_cents.max(0);
        }

        // Largest total wins; ties go to the lexicographically smallest
        // name so the ranking is deterministic.
        let top_category = category_totals
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(name, _)| name.to_string())
            .unwrap_or_else(|| "None".to_string());

        let wants_total: i64 = monthly
            .iter()
            .filter(|e| !e.is_need)
            .map(|e| e.amount_cents.max(0))
            .sum();
        let needs_total: i64 = monthly
            .iter()
            .filter(|e| e.is_need)
            .map(|e| e.amount_cents.max(0))
            .sum();

        // Strict threshold ladder, first match wins.
        let (grade, title, advice) = if percent > 100.0 {
            (
                "F",
                "The Deficit Dragon",
                format!(
                    "You've burned through the budget! Stop spending on {}!",
                    top_category
                ),
            )
        } else if percent > 85.0 {
            (
                "C",
                "Living on the Edge",
                "You are dangerously close. Freeze your \"Wants\" immediately.".to_string(),
            )
        } else if percent > 50.0 {
            (
                "B",
                "Balanced Bear",
                if wants_total > needs_total {
                    "Careful! Your \"Wants\" are higher than your \"Needs\".".to_string()
                } else {
                    "Solid month. You are on track.".to_string()
                },
            )
        } else {
            (
                "A+",
                "The Wealth Wizard",
                "Incredible discipline! You should invest the surplus.".to_string(),
            )
        };

        Self {
            month: today.format("%B").to_string(),
            spent_cents: spent,
            remaining_cents: budget_cents - spent,
            percentage_used: percent,
            top_category,
            wants_total_cents: wants_total,
            needs_total_cents: needs_total,
            grade,
            title,
            advice,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn expense(date: &str, amount_cents: i64, category: &str, is_need: bool) -> Expense {
        Expense {
            id: 0,
            user_id: 1,
            amount_cents,
            category: category.into(),
            is_need,
            description: None,
            created_at: Some(format!("{} 08:00:00", date)),
        }
    }

    #[test]
    fn test_empty_month() {
        let report = MonthlyReport::compute(&[], 1_000_000, d(2026, 8, 29));
        assert_eq!(report.spent_cents, 0);
        assert_eq!(report.top_category, "None");
        assert_eq!(report.grade, "A+");
        assert_eq!(report.month, "August");
    }

    #[test]
    fn test_only_reporting_month_counts() {
        let expenses = vec![
            expense("2026-08-10", 30_000, "Food", true),
            expense("2026-07-10", 99_000, "Travel", false),
            expense("2025-08-10", 99_000, "Travel", false),
        ];
        let report = MonthlyReport::compute(&expenses, 1_000_000, d(2026, 8, 29));
        assert_eq!(report.spent_cents, 30_000);
        assert_eq!(report.top_category, "Food");
    }

    #[test]
    fn test_grade_c_at_ninety_percent() {
        // budget=10000 units, spent=9000 units => 90% => C.
        let expenses = vec![expense("2026-08-05", 900_000, "Food", true)];
        let report = MonthlyReport::compute(&expenses, 1_000_000, d(2026, 8, 29));
        assert_eq!(report.percentage_used, 90.0);
        assert_eq!(report.grade, "C");
        assert_eq!(report.title, "Living on the Edge");
    }

    #[test]
    fn test_grade_a_plus_at_forty_percent() {
        let expenses = vec![expense("2026-08-05", 400_000, "Food", true)];
        let report = MonthlyReport::compute(&expenses, 1_000_000, d(2026, 8, 29));
        assert_eq!(report.percentage_used, 40.0);
        assert_eq!(report.grade, "A+");
        assert_eq!(report.title, "The Wealth Wizard");
    }

    #[test]
    fn test_grade_f_cites_top_category() {
        let expenses = vec![
            expense("2026-08-05", 800_000, "Fun", false),
            expense("2026-08-06", 300_000, "Food", true),
        ];
        let report = MonthlyReport::compute(&expenses, 1_000_000, d(2026, 8, 29));
        assert_eq!(report.grade, "F");
        assert_eq!(report.top_category, "Fun");
        assert!(report.advice.contains("Fun"));
    }

    #[test]
    fn test_grade_b_warns_on_wants_heavy_month() {
        let expenses = vec![
            expense("2026-08-05", 400_000, "Fun", false),
            expense("2026-08-06", 200_000, "Food", true),
        ];
        let report = MonthlyReport::compute(&expenses, 1_000_000, d(2026, 8, 29));
        assert_eq!(report.grade, "B");
        assert!(report.advice.contains("Wants"));
    }

    #[test]
    fn test_top_category_tie_break_is_deterministic() {
        let expenses = vec![
            expense("2026-08-05", 10_000, "Travel", false),
            expense("2026-08-06", 10_000, "Food", true),
        ];
        let report = MonthlyReport::compute(&expenses, 1_000_000, d(2026, 8, 29));
        assert_eq!(report.top_category, "Food");
    }

    #[test]
    fn test_idempotent() {
        let expenses = vec![
            expense("2026-08-05", 123_400, "Food", true),
            expense("2026-08-07", 56_700, "Fun", false),
        ];
        let a = MonthlyReport::compute(&expenses, 1_000_000, d(2026, 8, 29));
        let b = MonthlyReport::compute(&expenses, 1_000_000, d(2026, 8, 29));
        assert_eq!(a, b);
    }
}
