use crate::errors::{AppError, AppResult};
use crate::models::Problem;
use crate::utils::date;
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_PROBLEM: &str = "SELECT id, name, link, due_date, repetitions_left, max_repetitions, \
     current_interval FROM problems";

pub fn map_row(row: &Row) -> Result<Problem> {
    let due_str: String = row.get("due_date")?;
    let due_date = date::parse_db(&due_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidInput(format!(
                "malformed due date '{}'",
                due_str
            ))),
        )
    })?;

    Ok(Problem {
        id: row.get("id")?,
        name: row.get("name")?,
        link: row.get("link")?,
        due_date,
        repetitions_left: row.get("repetitions_left")?,
        max_repetitions: row.get("max_repetitions")?,
        current_interval: row.get("current_interval")?,
    })
}

fn collect(conn: &Connection, sql: &str, args: impl rusqlite::Params) -> AppResult<Vec<Problem>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map(args, map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert a new problem and return the id assigned by SQLite.
pub fn insert_problem(conn: &Connection, p: &Problem) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO problems
             (name, link, due_date, repetitions_left, max_repetitions, current_interval)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            p.name,
            p.link,
            date::format_db(&p.due_date),
            p.repetitions_left,
            p.max_repetitions,
            p.current_interval,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All problems, earliest due date first. Equal due dates keep insertion order.
pub fn load_all(conn: &Connection) -> AppResult<Vec<Problem>> {
    collect(
        conn,
        &format!("{SELECT_PROBLEM} ORDER BY due_date ASC, id ASC"),
        [],
    )
}

/// Problems whose due date is at or before `now`.
pub fn load_due(conn: &Connection, now: &NaiveDateTime) -> AppResult<Vec<Problem>> {
    collect(
        conn,
        &format!("{SELECT_PROBLEM} WHERE due_date <= ?1 ORDER BY due_date ASC, id ASC"),
        [date::format_db(now)],
    )
}

pub fn load_problem(conn: &Connection, id: i64) -> AppResult<Problem> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_PROBLEM} WHERE id = ?1"))?;
    stmt.query_row([id], map_row)
        .optional()?
        .ok_or(AppError::NotFound(id))
}

/// Update every mutable field of an existing problem.
pub fn update_problem(conn: &Connection, p: &Problem) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE problems
         SET name = ?1, link = ?2, due_date = ?3,
             repetitions_left = ?4, max_repetitions = ?5, current_interval = ?6
         WHERE id = ?7",
        params![
            p.name,
            p.link,
            date::format_db(&p.due_date),
            p.repetitions_left,
            p.max_repetitions,
            p.current_interval,
            p.id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::NotFound(p.id));
    }
    Ok(())
}

pub fn delete_problem(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM problems WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::NotFound(id));
    }
    Ok(())
}

pub fn count_problems(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM problems", [], |row| row.get(0))?)
}

pub fn count_due(conn: &Connection, now: &NaiveDateTime) -> AppResult<i64> {
    Ok(conn.query_row(
        "SELECT COUNT(*) FROM problems WHERE due_date <= ?1",
        [date::format_db(now)],
        |row| row.get(0),
    )?)
}
