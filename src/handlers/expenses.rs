use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use tracing::debug;

use crate::auth::CurrentUser;
use crate::db::queries::{categories, expenses};
use crate::error::{AppError, AppResult};
use crate::models::{Expense, NewExpense};
use crate::services::registry;
use crate::state::AppState;

/// Minimum accepted amount: one whole display unit.
const MIN_AMOUNT_CENTS: i64 = 100;

pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<Expense>>> {
    let conn = state.db.get()?;
    let expense_list = expenses::list_expenses(&conn, user.id)?;
    debug!(count = expense_list.len(), "Loaded expense snapshot");
    Ok(Json(expense_list))
}

pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<NewExpense>,
) -> AppResult<(StatusCode, Json<Expense>)> {
    let conn = state.db.get()?;
    validate_expense(&conn, user.id, &payload, None)?;

    let id = expenses::create_expense(&conn, user.id, &payload)?;
    let expense = expenses::get_expense(&conn, user.id, id)?
        .ok_or_else(|| AppError::Internal("Expense vanished after insert".into()))?;

    state.hub.notify(user.id);
    Ok((StatusCode::CREATED, Json(expense)))
}

pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<NewExpense>,
) -> AppResult<Json<Expense>> {
    let conn = state.db.get()?;
    let current = expenses::get_expense(&conn, user.id, id)?
        .ok_or_else(|| AppError::NotFound(format!("Expense {} not found", id)))?;
    validate_expense(&conn, user.id, &payload, Some(&current.category))?;

    if !expenses::update_expense(&conn, user.id, id, &payload)? {
        return Err(AppError::NotFound(format!("Expense {} not found", id)));
    }
    let expense = expenses::get_expense(&conn, user.id, id)?
        .ok_or_else(|| AppError::Internal("Expense vanished after update".into()))?;

    state.hub.notify(user.id);
    Ok(Json(expense))
}

pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let conn = state.db.get()?;
    if !expenses::delete_expense(&conn, user.id, id)? {
        return Err(AppError::NotFound(format!("Expense {} not found", id)));
    }

    state.hub.notify(user.id);
    Ok(StatusCode::NO_CONTENT)
}

/// Entry validation: the aggregation layer trusts its input, so nothing
/// below the minimum amount or outside the registered categories may reach
/// the store. `keep_category` is the row's stored category on edits; an
/// edit that keeps it skips the registry check, so expenses orphaned by a
/// category deletion stay editable.
fn validate_expense(
    conn: &rusqlite::Connection,
    user_id: i64,
    payload: &NewExpense,
    keep_category: Option<&str>,
) -> AppResult<()> {
    if payload.amount_cents < MIN_AMOUNT_CENTS {
        return Err(AppError::Validation(
            "Amount must be at least 1.00".into(),
        ));
    }

    if keep_category == Some(payload.category.as_str()) {
        return Ok(());
    }

    let customs = categories::list_categories(conn, user_id)?;
    if !registry::contains(&customs, &payload.category) {
        return Err(AppError::Validation(format!(
            "Unknown category '{}'",
            payload.category
        )));
    }

    Ok(())
}
