use crate::db::log::{LogEntry, load_log};
use crate::errors::AppResult;
use crate::utils::table::strip_ansi;
use ansi_term::Colour;
use rusqlite::Connection;

const OP_TARGET_MAX: usize = 60;

/// Colour of an operation name in the log listing.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "review" => Colour::Cyan,
        "edit" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "backup" | "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let entries = load_log(conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        println!("📜 Internal log:\n");
        for line in Self::format_lines(&entries) {
            println!("{}", line);
        }
        Ok(())
    }

    /// One aligned, coloured line per entry. Only the operation word is
    /// coloured; padding is computed on the text without escapes.
    pub fn format_lines(entries: &[LogEntry]) -> Vec<String> {
        let op_targets: Vec<String> = entries
            .iter()
            .map(|e| {
                let s = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                truncate_visible(&s, OP_TARGET_MAX)
            })
            .collect();

        let op_w = op_targets.iter().map(|s| s.chars().count()).max().unwrap_or(10);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);

        entries
            .iter()
            .zip(op_targets)
            .map(|(e, op_target)| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%F %T").to_string())
                    .unwrap_or_else(|_| e.date.clone());

                let color = color_for_operation(&e.operation);
                let colored = match op_target.split_once(' ') {
                    Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                    None => color.paint(op_target.as_str()).to_string(),
                };
                let padding =
                    " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

                format!(
                    "{:>id_w$}: {} | {}{} => {}",
                    e.id,
                    date,
                    colored,
                    padding,
                    e.message,
                    id_w = id_w
                )
            })
            .collect()
    }
}

fn truncate_visible(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}
