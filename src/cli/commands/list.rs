use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, section, use_color};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { due, json } = cmd {
        let store = open_store(cfg)?;
        let now = date::now();

        if *json {
            let views = ListLogic::views(&store, now, *due)?;
            let out = serde_json::to_string_pretty(&views)
                .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
            println!("{}", out);
            return Ok(());
        }

        let (due_now, upcoming) = ListLogic::partition(&store, now)?;
        let color = use_color();

        if due_now.is_empty() && upcoming.is_empty() {
            info("No problems tracked yet. Add one with `rrecall add <LINK>`.");
            return Ok(());
        }

        section("📌", "Due for review", due_now.len());
        if due_now.is_empty() {
            println!("Nothing due. 🎉");
        } else {
            print!("{}", ListLogic::render_table(&due_now, now, color));
        }

        if !*due {
            section("🗓️", "Upcoming", upcoming.len());
            if !upcoming.is_empty() {
                print!("{}", ListLogic::render_table(&upcoming, now, color));
            }
        }
    }
    Ok(())
}
