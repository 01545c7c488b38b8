use crate::models::expense::{Expense, NewExpense};
use rusqlite::{params, Connection, Row};
use tracing::debug;

const EXPENSE_COLUMNS: &str = "id, amount, category, date, note, created";

fn expense_from_row(row: &Row<'_>) -> rusqlite::Result<Expense> {
    Ok(Expense {
        id: row.get(0)?,
        amount: row.get(1)?,
        category: row.get(2)?,
        date: row.get(3)?,
        note: row.get(4)?,
        created: row.get(5)?,
    })
}

/// All expenses, most recently inserted first.
pub fn list_expenses(conn: &Connection) -> rusqlite::Result<Vec<Expense>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {EXPENSE_COLUMNS} FROM expenses ORDER BY created DESC, id DESC"
    ))?;
    let expenses = stmt
        .query_map([], expense_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    debug!(count = expenses.len(), "Listed expenses");
    Ok(expenses)
}

/// Expenses dated on or after `from_date` (`YYYY-MM-DD`), oldest first.
///
/// Passing `None` returns the whole ledger in the same order.
pub fn list_expenses_by_date(
    conn: &Connection,
    from_date: Option<&str>,
) -> rusqlite::Result<Vec<Expense>> {
    let expenses = match from_date {
        Some(from) => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {EXPENSE_COLUMNS} FROM expenses WHERE date >= ? ORDER BY date, id"
            ))?;
            let rows = stmt
                .query_map([from], expense_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            rows
        }
        None => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {EXPENSE_COLUMNS} FROM expenses ORDER BY date, id"
            ))?;
            let rows = stmt
                .query_map([], expense_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            rows
        }
    };

    debug!(count = expenses.len(), from = ?from_date, "Loaded ledger snapshot");
    Ok(expenses)
}

pub fn total_expenses(conn: &Connection) -> rusqlite::Result<f64> {
    conn.query_row("SELECT COALESCE(SUM(amount), 0) FROM expenses", [], |row| {
        row.get(0)
    })
}

pub fn create_expense(conn: &Connection, expense: &NewExpense) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO expenses (amount, category, date, note) VALUES (?, ?, ?, ?)",
        params![expense.amount, expense.category, expense.date, expense.note],
    )?;
    let id = conn.last_insert_rowid();
    debug!(expense_id = id, category = %expense.category, "Created expense");
    Ok(id)
}

pub fn delete_expense(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
    let rows = conn.execute("DELETE FROM expenses WHERE id = ?", [id])?;
    if rows > 0 {
        debug!(expense_id = id, "Deleted expense");
    }
    Ok(rows > 0)
}
