//! Fixed-window chart series.
//!
//! These are not general group-bys: the daily view is contractually the
//! last 7 calendar days and the monthly view the last 6 calendar months,
//! oldest first, with zero-valued points where nothing matched.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::date_utils::shift_months;
use crate::models::Expense;

pub const DAILY_WINDOW: i64 = 7;
pub const MONTHLY_WINDOW: i32 = 6;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value_cents: i64,
}

/// One point per day from `today - 6` through `today`, labelled with the
/// abbreviated weekday name.
pub fn daily_series(expenses: &[Expense], today: NaiveDate) -> Vec<SeriesPoint> {
    (0..DAILY_WINDOW)
        .rev()
        .map(|offset| {
            let day = today - chrono::Duration::days(offset);
            let value_cents = expenses
                .iter()
                .filter(|e| e.created_date() == Some(day))
                .map(|e| e.amount_cents.max(0))
                .sum();
            SeriesPoint {
                label: day.format("%a").to_string(),
                value_cents,
            }
        })
        .collect()
}

/// One point per month from `today`'s month minus 5 through `today`'s
/// month, labelled with the abbreviated month name. Spans year boundaries.
pub fn monthly_series(expenses: &[Expense], today: NaiveDate) -> Vec<SeriesPoint> {
    (0..MONTHLY_WINDOW)
        .rev()
        .map(|offset| {
            let month = shift_months(today, -offset);
            let value_cents = expenses
                .iter()
                .filter(|e| {
                    e.created_date()
                        .map(|d| d.year() == month.year() && d.month() == month.month())
                        .unwrap_or(false)
                })
                .map(|e| e.amount_cents.max(0))
                .sum();
            SeriesPoint {
                label: month.format("%b").to_string(),
                value_cents,
            }
        })
        .collect()
}
