use crate::models::user::User;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

fn row_to_user(row: &rusqlite::Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        password_hash: row.get(2)?,
        avatar_url: row.get(3)?,
        created_at: row.get(4)?,
    })
}

pub fn get_user_by_name(conn: &Connection, username: &str) -> rusqlite::Result<Option<User>> {
    conn.query_row(
        "SELECT id, username, password_hash, avatar_url, created_at
         FROM users WHERE username = ?",
        [username],
        row_to_user,
    )
    .optional()
}

pub fn get_user(conn: &Connection, id: i64) -> rusqlite::Result<Option<User>> {
    conn.query_row(
        "SELECT id, username, password_hash, avatar_url, created_at
         FROM users WHERE id = ?",
        [id],
        row_to_user,
    )
    .optional()
}

pub fn create_user(
    conn: &Connection,
    username: &str,
    password_hash: &str,
    avatar_url: Option<&str>,
) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO users (username, password_hash, avatar_url) VALUES (?, ?, ?)",
        params![username, password_hash, avatar_url],
    )?;
    let id = conn.last_insert_rowid();
    debug!(user_id = id, username = %username, "Created user");
    Ok(id)
}
