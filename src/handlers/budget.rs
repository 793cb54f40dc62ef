use axum::extract::State;
use axum::response::Json;

use crate::auth::CurrentUser;
use crate::db::queries::budget;
use crate::error::{AppError, AppResult};
use crate::models::{Budget, BudgetUpdate};
use crate::state::AppState;

pub async fn show(State(state): State<AppState>, user: CurrentUser) -> AppResult<Json<Budget>> {
    let conn = state.db.get()?;
    Ok(Json(budget::get_budget(&conn, user.id)?))
}

pub async fn upsert(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<BudgetUpdate>,
) -> AppResult<Json<Budget>> {
    if payload.monthly_limit_cents < 100 {
        return Err(AppError::Validation(
            "Monthly budget must be at least 1.00".into(),
        ));
    }

    let conn = state.db.get()?;
    budget::upsert_budget(&conn, user.id, payload.monthly_limit_cents)?;

    state.hub.notify(user.id);
    Ok(Json(budget::get_budget(&conn, user.id)?))
}
