use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

use crate::db::queries::categories;
use crate::error::{is_unique_violation, AppError, AppResult};
use crate::handlers::bad_json;
use crate::models::{Category, CreatedResponse, NewCategory};
use crate::state::AppState;

pub async fn index(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let conn = state.db.get()?;
    Ok(Json(categories::list_categories(&conn)?))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewCategory>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let Json(new_category) = body.map_err(bad_json)?;
    new_category.validate()?;

    let conn = state.db.get()?;
    let id = categories::create_category(&conn, &new_category).map_err(|e| {
        if is_unique_violation(&e) {
            AppError::Conflict("Category already exists".into())
        } else {
            AppError::Database(e)
        }
    })?;

    tracing::info!(category_id = id, name = %new_category.name, "Category created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Category created successfully".into(),
        }),
    ))
}
