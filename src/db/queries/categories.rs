use crate::models::category::{Category, NewCategory};
use rusqlite::Connection;
use tracing::debug;

pub fn list_categories(conn: &Connection) -> rusqlite::Result<Vec<Category>> {
    let mut stmt = conn.prepare("SELECT id, name FROM categories ORDER BY name")?;

    let categories = stmt
        .query_map([], |row| {
            Ok(Category {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(categories)
}

pub fn create_category(conn: &Connection, category: &NewCategory) -> rusqlite::Result<i64> {
    conn.execute("INSERT INTO categories (name) VALUES (?)", [&category.name])?;
    let id = conn.last_insert_rowid();
    debug!(category_id = id, name = %category.name, "Created category");
    Ok(id)
}
