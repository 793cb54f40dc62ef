use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Json};

use crate::auth::CurrentUser;
use crate::db::queries::{budget, expenses};
use crate::error::AppResult;
use crate::services::export::render_report;
use crate::services::report::MonthlyReport;
use crate::state::AppState;

fn load_report(state: &AppState, user_id: i64) -> AppResult<MonthlyReport> {
    let conn = state.db.get()?;
    let expense_list = expenses::list_expenses(&conn, user_id)?;
    let budget = budget::get_budget(&conn, user_id)?;
    let today = chrono::Local::now().date_naive();

    Ok(MonthlyReport::compute(
        &expense_list,
        budget.monthly_limit_cents,
        today,
    ))
}

pub async fn show(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<MonthlyReport>> {
    load_report(&state, user.id).map(Json)
}

/// Fixed-layout document rendering of the same report, served as a
/// download. The report is re-derived from the snapshot; being a pure
/// function, it cannot drift from what `show` returned.
pub async fn export(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<impl IntoResponse> {
    let report = load_report(&state, user.id)?;
    let filename = format!("FinTrack_Report_{}.txt", report.month);
    let body = render_report(&report);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    ))
}
