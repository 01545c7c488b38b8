//! Assembles the dashboard payload from independent metrics.
//!
//! Each metric reads the store on its own. Apart from the all-time total, a metric whose read
//! fails is logged and replaced with its empty value so the rest of the dashboard still renders.

use chrono::NaiveDate;
use tracing::warn;

use crate::date_utils::{Bucket, Window};
use crate::db::LedgerStore;
use crate::error::AppResult;
use crate::models::ExpenseAnalytics;
use crate::services::analytics::{self, TOP_CATEGORY_LIMIT};

pub const AVERAGE_DAILY_WINDOW: Window = Window::Days(30);
pub const AVERAGE_WEEKLY_WINDOW: Window = Window::Weeks(12);
pub const AVERAGE_MONTHLY_WINDOW: Window = Window::Months(12);
pub const DASHBOARD_MONTHLY_WINDOW: Window = Window::Months(6);
pub const DASHBOARD_WEEKLY_WINDOW: Window = Window::Weeks(8);

fn or_empty<T: Default>(metric: &'static str, result: AppResult<T>) -> T {
    result.unwrap_or_else(|e| {
        warn!(metric, error = %e, "Analytics metric unavailable, using empty value");
        T::default()
    })
}

fn average(store: &dyn LedgerStore, window: Window, bucket: Bucket, today: NaiveDate) -> AppResult<f64> {
    let expenses = store.expenses_since(window.start(today))?;
    Ok(analytics::rolling_average(&expenses, window, bucket, today))
}

pub fn compose_analytics(store: &dyn LedgerStore, today: NaiveDate) -> AppResult<ExpenseAnalytics> {
    let total_expenses = store.total_expenses()?;

    let average_daily = or_empty(
        "average_daily",
        average(store, AVERAGE_DAILY_WINDOW, Bucket::Day, today),
    );
    let average_weekly = or_empty(
        "average_weekly",
        average(store, AVERAGE_WEEKLY_WINDOW, Bucket::Week, today),
    );
    let average_monthly = or_empty(
        "average_monthly",
        average(store, AVERAGE_MONTHLY_WINDOW, Bucket::Month, today),
    );

    let monthly_data = or_empty(
        "monthly_data",
        store
            .expenses_since(DASHBOARD_MONTHLY_WINDOW.start(today))
            .map(|e| analytics::monthly_series(&e, DASHBOARD_MONTHLY_WINDOW, today)),
    );
    let weekly_data = or_empty(
        "weekly_data",
        store
            .expenses_since(DASHBOARD_WEEKLY_WINDOW.start(today))
            .map(|e| analytics::weekly_series(&e, DASHBOARD_WEEKLY_WINDOW, today)),
    );

    let category_breakdown = or_empty(
        "category_breakdown",
        store.expenses().map(|e| analytics::category_breakdown(&e)),
    );
    let top_categories = analytics::top_categories(&category_breakdown, TOP_CATEGORY_LIMIT);

    Ok(ExpenseAnalytics {
        total_expenses,
        average_daily,
        average_weekly,
        average_monthly,
        monthly_data,
        weekly_data,
        category_breakdown,
        top_categories,
    })
}
