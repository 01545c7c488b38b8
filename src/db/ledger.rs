//! Read-side interface to the expense ledger.
//!
//! Analytics never touch a connection directly; they receive a [`LedgerStore`] so every
//! computation can run against SQLite in production and against fixed data in tests.

use chrono::NaiveDate;
use rusqlite::Connection;

use crate::db::queries::{categories, expenses};
use crate::error::AppResult;
use crate::models::{Category, Expense};

pub trait LedgerStore {
    /// Whole ledger, ordered by date then id.
    fn expenses(&self) -> AppResult<Vec<Expense>>;

    /// Expenses dated on or after `from`, ordered by date then id.
    fn expenses_since(&self, from: NaiveDate) -> AppResult<Vec<Expense>>;

    /// All categories, ordered by name.
    fn categories(&self) -> AppResult<Vec<Category>>;

    /// Sum of every amount in the ledger; 0 when empty.
    fn total_expenses(&self) -> AppResult<f64>;
}

/// [`LedgerStore`] backed by a borrowed SQLite connection.
pub struct SqliteLedger<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteLedger<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl LedgerStore for SqliteLedger<'_> {
    fn expenses(&self) -> AppResult<Vec<Expense>> {
        Ok(expenses::list_expenses_by_date(self.conn, None)?)
    }

    fn expenses_since(&self, from: NaiveDate) -> AppResult<Vec<Expense>> {
        let from = from.format("%Y-%m-%d").to_string();
        Ok(expenses::list_expenses_by_date(self.conn, Some(&from))?)
    }

    fn categories(&self) -> AppResult<Vec<Category>> {
        Ok(categories::list_categories(self.conn)?)
    }

    fn total_expenses(&self) -> AppResult<f64> {
        Ok(expenses::total_expenses(self.conn)?)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_in_memory_pool, migrations, queries};
    use crate::models::NewExpense;
    use std::path::Path;

    #[test]
    fn test_sqlite_ledger_reads_through_queries() {
        let pool = create_in_memory_pool().unwrap();
        let conn = pool.get().unwrap();
        migrations::run_migrations(&conn, Path::new("migrations")).unwrap();

        for (amount, date) in [(4.0, "2025-08-02"), (6.0, "2025-07-30")] {
            queries::expenses::create_expense(
                &conn,
                &NewExpense {
                    amount,
                    category: "Food".into(),
                    date: date.into(),
                    note: "n".into(),
                },
            )
            .unwrap();
        }

        let ledger = SqliteLedger::new(&conn);
        assert_eq!(ledger.total_expenses().unwrap(), 10.0);
        assert_eq!(ledger.expenses().unwrap()[0].date, "2025-07-30");
        assert_eq!(ledger.categories().unwrap().len(), 5);

        let since = ledger
            .expenses_since(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap())
            .unwrap();
        assert_eq!(since.len(), 1);
        assert_eq!(since[0].amount, 4.0);
    }
}
