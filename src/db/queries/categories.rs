use crate::models::category::Category;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

fn row_to_category(row: &rusqlite::Row) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        created_at: row.get(3)?,
    })
}

pub fn list_categories(conn: &Connection, user_id: i64) -> rusqlite::Result<Vec<Category>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, name, created_at
         FROM custom_categories
         WHERE user_id = ?
         ORDER BY created_at, id",
    )?;

    let categories = stmt
        .query_map([user_id], row_to_category)?
        .filter_map(|c| c.ok())
        .collect();

    Ok(categories)
}

pub fn get_category(
    conn: &Connection,
    user_id: i64,
    id: i64,
) -> rusqlite::Result<Option<Category>> {
    conn.query_row(
        "SELECT id, user_id, name, created_at
         FROM custom_categories WHERE id = ? AND user_id = ?",
        [id, user_id],
        row_to_category,
    )
    .optional()
}

pub fn create_category(conn: &Connection, user_id: i64, name: &str) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO custom_categories (user_id, name) VALUES (?, ?)",
        params![user_id, name],
    )?;
    let id = conn.last_insert_rowid();
    debug!(category_id = id, name = %name, "Created category");
    Ok(id)
}

pub fn rename_category(
    conn: &Connection,
    user_id: i64,
    id: i64,
    name: &str,
) -> rusqlite::Result<bool> {
    let rows = conn.execute(
        "UPDATE custom_categories SET name = ? WHERE id = ? AND user_id = ?",
        params![name, id, user_id],
    )?;
    if rows > 0 {
        debug!(category_id = id, name = %name, "Renamed category");
    }
    Ok(rows > 0)
}

/// Deleting a category never touches expenses that reference its name;
/// those rows keep the name as a free-text tag.
pub fn delete_category(conn: &Connection, user_id: i64, id: i64) -> rusqlite::Result<bool> {
    let rows = conn.execute(
        "DELETE FROM custom_categories WHERE id = ? AND user_id = ?",
        [id, user_id],
    )?;
    if rows > 0 {
        debug!(category_id = id, "Deleted category");
    }
    Ok(rows > 0)
}
