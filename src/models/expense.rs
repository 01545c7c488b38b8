use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// A single ledger entry.
///
/// `date` is kept in its stored `YYYY-MM-DD` text form; analytics parse it on demand.
/// `amount` is stored as entered, negative values included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub amount: f64,
    pub category: String,
    pub date: String,
    pub note: String,
    pub created: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewExpense {
    pub amount: f64,
    pub category: String,
    pub date: String,
    pub note: String,
}

impl NewExpense {
    pub fn validate(&self) -> AppResult<()> {
        if !self.amount.is_finite() {
            return Err(AppError::Validation("amount must be a number".into()));
        }
        for (field, value) in [
            ("category", &self.category),
            ("date", &self.date),
            ("note", &self.note),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} is required")));
            }
        }
        Ok(())
    }
}
