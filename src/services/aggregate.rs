//! Budget aggregation over an expense snapshot.
//!
//! Pure functions of `(expenses, budget, today)`. Pending expenses (no
//! acknowledged `created_at`) contribute nothing, and negative amounts are
//! clamped to zero so the displayed aggregates can never go nonsensical.

use chrono::NaiveDate;
use serde::Serialize;

use crate::date_utils::days_remaining_in_month;
use crate::models::Expense;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub total_spent_cents: i64,
    pub remaining_cents: i64,
    pub percentage_used: f64,
    pub days_remaining_in_month: i64,
    /// Rounded to a whole display unit (multiple of 100 cents); 0 once the
    /// budget is exhausted, never negative.
    pub safe_to_spend_today_cents: i64,
    pub needs_total_cents: i64,
    pub wants_total_cents: i64,
}

impl BudgetSummary {
    pub fn compute(expenses: &[Expense], budget_cents: i64, today: NaiveDate) -> Self {
        let mut total = 0i64;
        let mut needs = 0i64;
        let mut wants = 0i64;

        for expense in expenses.iter().filter(|e| e.is_resolved()) {
            let amount = expense.amount_cents.max(0);
            total += amount;
            if expense.is_need {
                needs += amount;
            } else {
                wants += amount;
            }
        }

        let remaining = budget_cents - total;
        let percentage_used = if budget_cents > 0 {
            (total as f64 / budget_cents as f64) * 100.0
        } else {
            0.0
        };

        let days_remaining = days_remaining_in_month(today);
        let safe_to_spend = if remaining > 0 {
            let per_day = remaining as f64 / days_remaining as f64;
            ((per_day / 100.0).round() as i64) * 100
        } else {
            0
        };

        Self {
            total_spent_cents: total,
            remaining_cents: remaining,
            percentage_used,
            days_remaining_in_month: days_remaining,
            safe_to_spend_today_cents: safe_to_spend,
            needs_total_cents: needs,
            wants_total_cents: wants,
        }
    }
}
