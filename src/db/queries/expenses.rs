use crate::models::expense::{Expense, NewExpense};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

fn row_to_expense(row: &rusqlite::Row) -> rusqlite::Result<Expense> {
    Ok(Expense {
        id: row.get(0)?,
        user_id: row.get(1)?,
        amount_cents: row.get(2)?,
        category: row.get(3)?,
        is_need: row.get(4)?,
        description: row.get(5)?,
        created_at: row.get(6)?,
    })
}

/// Full snapshot of one user's expenses, newest first. The metrics engine
/// treats the result as an unordered set; the ordering is for display.
pub fn list_expenses(conn: &Connection, user_id: i64) -> rusqlite::Result<Vec<Expense>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, amount_cents, category, is_need, description, created_at
         FROM expenses
         WHERE user_id = ?
         ORDER BY created_at DESC",
    )?;

    let expenses = stmt
        .query_map([user_id], row_to_expense)?
        .filter_map(|e| e.ok())
        .collect();

    Ok(expenses)
}

pub fn get_expense(conn: &Connection, user_id: i64, id: i64) -> rusqlite::Result<Option<Expense>> {
    conn.query_row(
        "SELECT id, user_id, amount_cents, category, is_need, description, created_at
         FROM expenses WHERE id = ? AND user_id = ?",
        [id, user_id],
        row_to_expense,
    )
    .optional()
}

pub fn create_expense(
    conn: &Connection,
    user_id: i64,
    expense: &NewExpense,
) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO expenses (user_id, amount_cents, category, is_need, description, created_at)
         VALUES (?, ?, ?, ?, ?, datetime('now', 'localtime'))",
        params![
            user_id,
            expense.amount_cents,
            expense.category,
            expense.is_need,
            expense.description,
        ],
    )?;
    let id = conn.last_insert_rowid();
    debug!(expense_id = id, amount_cents = expense.amount_cents, "Created expense");
    Ok(id)
}

/// Edits keep the original `created_at`; only the user-entered fields move.
pub fn update_expense(
    conn: &Connection,
    user_id: i64,
    id: i64,
    expense: &NewExpense,
) -> rusqlite::Result<bool> {
    let rows = conn.execute(
        "UPDATE expenses SET amount_cents = ?, category = ?, is_need = ?, description = ?
         WHERE id = ? AND user_id = ?",
        params![
            expense.amount_cents,
            expense.category,
            expense.is_need,
            expense.description,
            id,
            user_id,
        ],
    )?;
    if rows > 0 {
        debug!(expense_id = id, "Updated expense");
    }
    Ok(rows > 0)
}

pub fn delete_expense(conn: &Connection, user_id: i64, id: i64) -> rusqlite::Result<bool> {
    let rows = conn.execute(
        "DELETE FROM expenses WHERE id = ? AND user_id = ?",
        [id, user_id],
    )?;
    if rows > 0 {
        debug!(expense_id = id, "Deleted expense");
    }
    Ok(rows > 0)
}
