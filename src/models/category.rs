use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Categories the store is seeded with on first start.
pub const DEFAULT_CATEGORIES: &[&str] = &["Food", "Travel", "Groceries", "Entertainment", "Others"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewCategory {
    pub name: String,
}

impl NewCategory {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name is required".into()));
        }
        Ok(())
    }
}
