pub mod analytics;
pub mod category;
pub mod expense;

pub use analytics::{
    CategoryMonthlyExpense, DailyExpense, ExpenseAnalytics, ExpenseSummary, MonthlyExpense,
    WeeklyExpense,
};
pub use category::{Category, NewCategory};
pub use expense::{Expense, NewExpense};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreatedResponse {
    pub id: i64,
    pub message: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
