use fintrack::db::migrations::run_migrations;
use rusqlite::Connection;
use std::fs;

fn table_exists(conn: &Connection, name: &str) -> bool {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?)",
        [name],
        |row| row.get(0),
    )
    .unwrap()
}

#[test]
fn test_migrations_apply_in_order_and_only_once() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("001_users.sql"),
        "CREATE TABLE users (id INTEGER PRIMARY KEY);",
    )
    .unwrap();
    fs::write(
        dir.path().join("002_expenses.sql"),
        "CREATE TABLE expenses (id INTEGER PRIMARY KEY, user_id INTEGER REFERENCES users(id));",
    )
    .unwrap();

    let conn = Connection::open_in_memory().unwrap();
    run_migrations(&conn, dir.path()).unwrap();

    assert!(table_exists(&conn, "users"));
    assert!(table_exists(&conn, "expenses"));

    // Re-running is a no-op, not a CREATE TABLE error
    run_migrations(&conn, dir.path()).unwrap();

    let applied: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_migrations", [], |row| row.get(0))
        .unwrap();
    assert_eq!(applied, 2);
}

#[test]
fn test_new_migration_files_are_picked_up() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("001_users.sql"),
        "CREATE TABLE users (id INTEGER PRIMARY KEY);",
    )
    .unwrap();

    let conn = Connection::open_in_memory().unwrap();
    run_migrations(&conn, dir.path()).unwrap();
    assert!(!table_exists(&conn, "budgets"));

    fs::write(
        dir.path().join("002_budgets.sql"),
        "CREATE TABLE budgets (user_id INTEGER PRIMARY KEY, monthly_limit_cents INTEGER NOT NULL);",
    )
    .unwrap();
    run_migrations(&conn, dir.path()).unwrap();
    assert!(table_exists(&conn, "budgets"));
}

#[test]
fn test_non_sql_files_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("README.md"), "not a migration").unwrap();
    fs::write(
        dir.path().join("001_users.sql"),
        "CREATE TABLE users (id INTEGER PRIMARY KEY);",
    )
    .unwrap();

    let conn = Connection::open_in_memory().unwrap();
    run_migrations(&conn, dir.path()).unwrap();

    let applied: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_migrations", [], |row| row.get(0))
        .unwrap();
    assert_eq!(applied, 1);
}
