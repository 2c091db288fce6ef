use crate::db::ProblemStore;
use crate::db::queries::{count_due, count_problems};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET, YELLOW};
use crate::utils::date;
use rusqlite::OptionalExtension;
use std::fs;
use std::path::Path;

pub fn print_db_info(store: &ProblemStore, db_path: &Path) -> AppResult<()> {
    let conn = store.conn();
    let now = date::now();
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path.display(), RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) PROBLEMS
    //
    let total = count_problems(conn)?;
    let due = count_due(conn, &now)?;
    println!("{}• Tracked problems:{} {}{}{}", CYAN, RESET, GREEN, total, RESET);
    println!("{}• Due now:{} {}{}{}", CYAN, RESET, RED, due, RESET);

    //
    // 3) DUE DATE RANGE
    //
    let first: Option<String> = conn
        .query_row(
            "SELECT substr(due_date, 1, 10) FROM problems ORDER BY due_date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;
    let last: Option<String> = conn
        .query_row(
            "SELECT substr(due_date, 1, 10) FROM problems ORDER BY due_date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let dash = || format!("{GREY}--{RESET}");
    println!("{}• Due dates:{}", CYAN, RESET);
    println!("    from: {}", first.unwrap_or_else(dash));
    println!("    to:   {}", last.unwrap_or_else(dash));

    println!();
    Ok(())
}
