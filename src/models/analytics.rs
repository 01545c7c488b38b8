use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    pub category: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyExpense {
    /// `YYYY-MM`
    pub month: String,
    /// e.g. "August 2025"; empty when the month key cannot be read.
    pub month_name: String,
    pub total: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyExpense {
    /// `YYYY-Www`, Monday-started week-of-year (not ISO 8601).
    pub week: String,
    /// e.g. "08-11 to 08-17, 2025"
    pub week_range: String,
    pub total: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyExpense {
    pub date: String,
    pub total: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMonthlyExpense {
    pub category: String,
    pub month: String,
    pub total: f64,
    pub count: usize,
}

/// Combined dashboard payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseAnalytics {
    pub total_expenses: f64,
    pub average_daily: f64,
    pub average_weekly: f64,
    pub average_monthly: f64,
    pub monthly_data: Vec<MonthlyExpense>,
    pub weekly_data: Vec<WeeklyExpense>,
    pub category_breakdown: Vec<ExpenseSummary>,
    pub top_categories: Vec<ExpenseSummary>,
}
