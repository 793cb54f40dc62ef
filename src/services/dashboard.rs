//! The "recompute everything" entry point.
//!
//! Invoked on every snapshot change instead of patching stored derived
//! state, so the displayed metrics can never drift from the source
//! snapshot.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::Expense;
use crate::services::aggregate::BudgetSummary;
use crate::services::series::{daily_series, monthly_series, SeriesPoint};
use crate::services::streak::{has_entry_today, pet_state, streak, PetState};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardMetrics {
    pub summary: BudgetSummary,
    pub streak: u32,
    pub has_entry_today: bool,
    pub pet: PetState,
    pub daily: Vec<SeriesPoint>,
    pub monthly: Vec<SeriesPoint>,
}

impl DashboardMetrics {
    pub fn compute(expenses: &[Expense], budget_cents: i64, today: NaiveDate) -> Self {
        let streak = streak(expenses, today);
        let has_entry_today = has_entry_today(expenses, today);

        Self {
            summary: BudgetSummary::compute(expenses, budget_cents, today),
            streak,
            has_entry_today,
            pet: pet_state(streak, has_entry_today),
            daily: daily_series(expenses, today),
            monthly: monthly_series(expenses, today),
        }
    }
}
