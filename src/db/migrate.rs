//! Schema bootstrap.
//!
//! Every applied step is recorded in the `log` table as a
//! `migration_applied` row so it runs only once per database.

use rusqlite::{Connection, OptionalExtension, Result, params};

const CREATE_PROBLEMS: &str = "20251019_0001_create_problems";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        params![chrono::Local::now().to_rfc3339(), version, message],
    )?;
    Ok(())
}

/// Check if the `problems` table exists.
fn problems_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='problems'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn create_problems_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS problems (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            name             TEXT NOT NULL,
            link             TEXT NOT NULL CHECK(length(trim(link)) > 0),
            due_date         TEXT NOT NULL,
            repetitions_left INTEGER NOT NULL CHECK(repetitions_left >= 1),
            max_repetitions  INTEGER NOT NULL CHECK(max_repetitions >= 1),
            current_interval INTEGER NOT NULL DEFAULT 14 CHECK(current_interval >= 1)
        );

        CREATE INDEX IF NOT EXISTS idx_problems_due_date ON problems(due_date);
        "#,
    )?;
    Ok(())
}

/// Run all pending schema steps and return the versions applied now.
/// An up-to-date database yields an empty list.
pub fn run_pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();

    if !is_applied(conn, CREATE_PROBLEMS)? || !problems_table_exists(conn)? {
        let tx = conn.unchecked_transaction()?;
        create_problems_table(&tx)?;
        mark_applied(&tx, CREATE_PROBLEMS, "Created problems table")?;
        tx.commit()?;
        applied.push(CREATE_PROBLEMS);
    }

    Ok(applied)
}
