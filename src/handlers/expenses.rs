use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;

use crate::db::queries::expenses;
use crate::error::{is_foreign_key_violation, AppError, AppResult};
use crate::handlers::bad_json;
use crate::models::{CreatedResponse, Expense, MessageResponse, NewExpense};
use crate::state::AppState;

pub async fn index(State(state): State<AppState>) -> AppResult<Json<Vec<Expense>>> {
    let conn = state.db.get()?;
    Ok(Json(expenses::list_expenses(&conn)?))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewExpense>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let Json(new_expense) = body.map_err(bad_json)?;
    new_expense.validate()?;

    let conn = state.db.get()?;
    let id = expenses::create_expense(&conn, &new_expense).map_err(|e| {
        if is_foreign_key_violation(&e) {
            AppError::Validation(format!("Unknown category: {}", new_expense.category))
        } else {
            AppError::Database(e)
        }
    })?;

    tracing::info!(expense_id = id, "Expense created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Expense created successfully".into(),
        }),
    ))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id: i64 = id
        .parse()
        .map_err(|_| AppError::Validation("Invalid expense ID".into()))?;

    let conn = state.db.get()?;
    if !expenses::delete_expense(&conn, id)? {
        return Err(AppError::NotFound("Expense not found".into()));
    }

    tracing::info!(expense_id = id, "Expense deleted");
    Ok(Json(MessageResponse {
        message: "Expense deleted successfully".into(),
    }))
}
