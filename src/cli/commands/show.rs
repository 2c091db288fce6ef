use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{CYAN, RESET};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id, json } = cmd {
        let store = open_store(cfg)?;
        let now = date::now();
        let p = store.get(*id)?;

        if *json {
            let out = serde_json::to_string_pretty(&p.view(now))
                .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
            println!("{}", out);
            return Ok(());
        }

        println!("\n{CYAN}#{} {}{RESET}", p.id, p.name);
        println!("  Link:        {}", p.link);
        println!(
            "  Due:         {} ({})",
            p.due_date_str(),
            date::relative_days(p.due_date, now)
        );
        println!("  Interval:    {} days", p.current_interval);
        println!(
            "  Reps left:   {} of {}",
            p.repetitions_left, p.max_repetitions
        );
        println!(
            "  Status:      {}",
            if p.is_due(now) { "due" } else { "upcoming" }
        );
    }
    Ok(())
}
