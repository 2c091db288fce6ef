use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::ui::messages::{scheduled, warning};
use crate::utils::name::UNKNOWN_PROBLEM;

/// Track a new problem.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { link, reps } = cmd {
        let mut store = open_store(cfg)?;
        let problem = AddLogic::apply(&mut store, cfg, link, *reps)?;

        if problem.name == UNKNOWN_PROBLEM {
            warning("Could not derive a name from the link (expected .../problems/<slug>/).");
        }

        scheduled(format!(
            "Added #{} '{}': first review on {}, {} repetitions to go.",
            problem.id,
            problem.name,
            problem.due_date_str(),
            problem.repetitions_left
        ));
    }

    Ok(())
}
