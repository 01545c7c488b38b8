use axum::extract::State;
use axum::response::Json;

use crate::date_utils;
use crate::db::SqliteLedger;
use crate::error::AppResult;
use crate::models::{
    CategoryMonthlyExpense, DailyExpense, ExpenseAnalytics, ExpenseSummary, MonthlyExpense,
    WeeklyExpense,
};
use crate::services::{composer, reports};
use crate::state::AppState;

pub async fn summary(State(state): State<AppState>) -> AppResult<Json<Vec<ExpenseSummary>>> {
    let conn = state.db.get()?;
    let ledger = SqliteLedger::new(&conn);
    Ok(Json(reports::expense_summary(&ledger)?))
}

pub async fn overview(State(state): State<AppState>) -> AppResult<Json<ExpenseAnalytics>> {
    let conn = state.db.get()?;
    let ledger = SqliteLedger::new(&conn);
    Ok(Json(composer::compose_analytics(&ledger, date_utils::today())?))
}

pub async fn monthly(State(state): State<AppState>) -> AppResult<Json<Vec<MonthlyExpense>>> {
    let conn = state.db.get()?;
    let ledger = SqliteLedger::new(&conn);
    Ok(Json(reports::monthly_expenses(
        &ledger,
        reports::MONTHLY_REPORT_WINDOW,
        date_utils::today(),
    )?))
}

pub async fn weekly(State(state): State<AppState>) -> AppResult<Json<Vec<WeeklyExpense>>> {
    let conn = state.db.get()?;
    let ledger = SqliteLedger::new(&conn);
    Ok(Json(reports::weekly_expenses(
        &ledger,
        reports::WEEKLY_REPORT_WINDOW,
        date_utils::today(),
    )?))
}

pub async fn daily(State(state): State<AppState>) -> AppResult<Json<Vec<DailyExpense>>> {
    let conn = state.db.get()?;
    let ledger = SqliteLedger::new(&conn);
    Ok(Json(reports::daily_expenses(
        &ledger,
        reports::DAILY_REPORT_WINDOW,
        date_utils::today(),
    )?))
}

pub async fn category_monthly(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CategoryMonthlyExpense>>> {
    let conn = state.db.get()?;
    let ledger = SqliteLedger::new(&conn);
    Ok(Json(reports::category_monthly_expenses(
        &ledger,
        reports::CATEGORY_MONTHLY_REPORT_WINDOW,
        date_utils::today(),
    )?))
}
