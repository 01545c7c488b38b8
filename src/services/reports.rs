//! Ledger reports built from a [`LedgerStore`] snapshot.

use chrono::NaiveDate;

use crate::date_utils::Window;
use crate::db::LedgerStore;
use crate::error::AppResult;
use crate::models::{
    CategoryMonthlyExpense, DailyExpense, ExpenseSummary, MonthlyExpense, WeeklyExpense,
};
use crate::services::analytics;

pub const MONTHLY_REPORT_WINDOW: Window = Window::Months(12);
pub const WEEKLY_REPORT_WINDOW: Window = Window::Weeks(12);
pub const DAILY_REPORT_WINDOW: Window = Window::Days(30);
pub const CATEGORY_MONTHLY_REPORT_WINDOW: Window = Window::Months(12);

/// All-time totals for every defined category, including those without expenses.
pub fn expense_summary(store: &dyn LedgerStore) -> AppResult<Vec<ExpenseSummary>> {
    let categories = store.categories()?;
    let expenses = store.expenses()?;
    Ok(analytics::category_summary(&categories, &expenses))
}

pub fn monthly_expenses(
    store: &dyn LedgerStore,
    window: Window,
    today: NaiveDate,
) -> AppResult<Vec<MonthlyExpense>> {
    let expenses = store.expenses_since(window.start(today))?;
    Ok(analytics::monthly_series(&expenses, window, today))
}

pub fn weekly_expenses(
    store: &dyn LedgerStore,
    window: Window,
    today: NaiveDate,
) -> AppResult<Vec<WeeklyExpense>> {
    let expenses = store.expenses_since(window.start(today))?;
    Ok(analytics::weekly_series(&expenses, window, today))
}

pub fn daily_expenses(
    store: &dyn LedgerStore,
    window: Window,
    today: NaiveDate,
) -> AppResult<Vec<DailyExpense>> {
    let expenses = store.expenses_since(window.start(today))?;
    Ok(analytics::daily_series(&expenses, window, today))
}

pub fn category_monthly_expenses(
    store: &dyn LedgerStore,
    window: Window,
    today: NaiveDate,
) -> AppResult<Vec<CategoryMonthlyExpense>> {
    let expenses = store.expenses_since(window.start(today))?;
    Ok(analytics::category_monthly_series(&expenses, window, today))
}
