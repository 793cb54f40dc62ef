use crate::models::budget::Budget;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

/// Current budget, or the fixed fallback when the user never set one.
pub fn get_budget(conn: &Connection, user_id: i64) -> rusqlite::Result<Budget> {
    let stored = conn
        .query_row(
            "SELECT monthly_limit_cents FROM budgets WHERE user_id = ?",
            [user_id],
            |row| row.get::<_, i64>(0),
        )
        .optional()?;

    Ok(match stored {
        Some(monthly_limit_cents) => Budget {
            user_id,
            monthly_limit_cents,
        },
        None => Budget::fallback(user_id),
    })
}

/// Create-or-update; only the current value persists, no history.
pub fn upsert_budget(
    conn: &Connection,
    user_id: i64,
    monthly_limit_cents: i64,
) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO budgets (user_id, monthly_limit_cents) VALUES (?, ?)
         ON CONFLICT(user_id) DO UPDATE SET monthly_limit_cents = excluded.monthly_limit_cents",
        params![user_id, monthly_limit_cents],
    )?;
    debug!(user_id, monthly_limit_cents, "Upserted budget");
    Ok(())
}
