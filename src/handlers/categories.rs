use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;

use crate::auth::CurrentUser;
use crate::db::queries::categories;
use crate::error::{AppError, AppResult};
use crate::models::{Category, NewCategory};
use crate::services::registry;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CategoryList {
    pub builtins: Vec<&'static str>,
    pub customs: Vec<Category>,
    /// The merged effective list, builtins first.
    pub all: Vec<String>,
}

pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<CategoryList>> {
    let conn = state.db.get()?;
    let customs = categories::list_categories(&conn, user.id)?;
    let all = registry::merged_names(&customs);

    Ok(Json(CategoryList {
        builtins: registry::BUILTIN_CATEGORIES.to_vec(),
        customs,
        all,
    }))
}

pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<NewCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let conn = state.db.get()?;
    let customs = categories::list_categories(&conn, user.id)?;
    registry::validate_new_name(&customs, &payload.name).map_err(AppError::Validation)?;

    let id = categories::create_category(&conn, user.id, &payload.name)?;
    let category = categories::get_category(&conn, user.id, id)?
        .ok_or_else(|| AppError::Internal("Category vanished after insert".into()))?;

    state.hub.notify(user.id);
    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn rename(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<NewCategory>,
) -> AppResult<Json<Category>> {
    let conn = state.db.get()?;
    let customs = categories::list_categories(&conn, user.id)?;
    registry::validate_rename(&customs, id, &payload.name).map_err(AppError::Validation)?;

    if !categories::rename_category(&conn, user.id, id, &payload.name)? {
        return Err(AppError::NotFound(format!("Category {} not found", id)));
    }
    let category = categories::get_category(&conn, user.id, id)?
        .ok_or_else(|| AppError::Internal("Category vanished after rename".into()))?;

    state.hub.notify(user.id);
    Ok(Json(category))
}

/// Removes a custom category. Built-ins are not addressable here, and
/// expenses referencing the deleted name keep it.
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let conn = state.db.get()?;
    if !categories::delete_category(&conn, user.id, id)? {
        return Err(AppError::NotFound(format!("Category {} not found", id)));
    }

    state.hub.notify(user.id);
    Ok(StatusCode::NO_CONTENT)
}
