use axum::extract::State;
use axum::response::Json;
use tracing::debug;

use crate::auth::CurrentUser;
use crate::db::queries::{budget, expenses};
use crate::error::AppResult;
use crate::services::dashboard::DashboardMetrics;
use crate::state::AppState;

/// Load the current snapshot and recompute every derived metric.
pub fn load_dashboard(state: &AppState, user_id: i64) -> AppResult<DashboardMetrics> {
    let conn = state.db.get()?;
    let expense_list = expenses::list_expenses(&conn, user_id)?;
    let budget = budget::get_budget(&conn, user_id)?;
    let today = chrono::Local::now().date_naive();

    debug!(
        expense_count = expense_list.len(),
        budget_cents = budget.monthly_limit_cents,
        "Recomputing dashboard metrics"
    );

    Ok(DashboardMetrics::compute(
        &expense_list,
        budget.monthly_limit_cents,
        today,
    ))
}

pub async fn index(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<DashboardMetrics>> {
    load_dashboard(&state, user.id).map(Json)
}
