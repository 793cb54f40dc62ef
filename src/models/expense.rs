use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Timestamp format used in the `created_at` column.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub user_id: i64,
    pub amount_cents: i64,
    pub category: String,
    pub is_need: bool,
    pub description: Option<String>,
    /// Store-assigned timestamp. `None` means the write has not been
    /// acknowledged yet; such pending rows are excluded from all
    /// date-bucketed and streak computations.
    pub created_at: Option<String>,
}

impl Expense {
    pub fn is_resolved(&self) -> bool {
        self.created_at.is_some()
    }

    /// Calendar date of the entry, day granularity, time of day discarded.
    pub fn created_date(&self) -> Option<NaiveDate> {
        let ts = self.created_at.as_deref()?;
        chrono::NaiveDateTime::parse_from_str(ts, CREATED_AT_FORMAT)
            .map(|dt| dt.date())
            .or_else(|_| NaiveDate::parse_from_str(ts, "%Y-%m-%d"))
            .ok()
    }

    pub fn amount_display(&self) -> String {
        format_cents(self.amount_cents)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewExpense {
    pub amount_cents: i64,
    pub category: String,
    pub is_need: bool,
    pub description: Option<String>,
}

pub fn format_cents(cents: i64) -> String {
    let is_negative = cents < 0;
    let abs_cents = cents.abs();
    let units = abs_cents / 100;
    let remainder = abs_cents % 100;

    if is_negative {
        format!("-{}.{:02}", units, remainder)
    } else {
        format!("{}.{:02}", units, remainder)
    }
}
