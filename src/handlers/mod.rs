pub mod analytics;
pub mod categories;
pub mod expenses;

use axum::extract::rejection::JsonRejection;
use axum::routing::{delete, get};
use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        // Expenses
        .route("/api/expenses", get(expenses::index).post(expenses::create))
        .route("/api/expenses/:id", delete(expenses::delete))
        // Categories
        .route(
            "/api/categories",
            get(categories::index).post(categories::create),
        )
        // Summary & analytics
        .route("/api/summary", get(analytics::summary))
        .route("/api/analytics", get(analytics::overview))
        .route("/api/analytics/monthly", get(analytics::monthly))
        .route("/api/analytics/weekly", get(analytics::weekly))
        .route("/api/analytics/daily", get(analytics::daily))
        .route(
            "/api/analytics/category-monthly",
            get(analytics::category_monthly),
        )
        // Health check
        .route("/health", get(health))
        .fallback(fallback)
}

async fn health() -> &'static str {
    "OK"
}

async fn fallback() -> AppError {
    AppError::NotFound("Not found".into())
}

/// Turns a rejected JSON body into a 400 with the extractor's explanation.
pub(crate) fn bad_json(rejection: JsonRejection) -> AppError {
    AppError::Validation(rejection.body_text())
}
