//! File-based schema migrations.
//!
//! Applies the `.sql` files in the migrations directory in filename order
//! and records each one in `schema_migrations`, so reruns only pick up
//! files not seen before.

use rusqlite::Connection;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub fn run_migrations(conn: &Connection, migrations_dir: &Path) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            name TEXT PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
    )?;

    let applied: HashSet<String> = conn
        .prepare("SELECT name FROM schema_migrations")?
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<_>>()?;

    let mut files: Vec<PathBuf> = fs::read_dir(migrations_dir)
        .map(|entries| {
            entries
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|path| path.extension().is_some_and(|ext| ext == "sql"))
                .collect()
        })
        .unwrap_or_default();
    files.sort();

    tracing::debug!(
        dir = %migrations_dir.display(),
        found = files.len(),
        applied = applied.len(),
        "Checked schema migrations"
    );

    for path in files {
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };
        if applied.contains(&name) {
            continue;
        }

        let sql = fs::read_to_string(&path)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        tracing::info!(migration = %name, "Applying schema migration");
        conn.execute_batch(&sql)?;
        conn.execute("INSERT INTO schema_migrations (name) VALUES (?)", [&name])?;
    }

    Ok(())
}
