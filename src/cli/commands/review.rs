use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::review::{ReviewLogic, ReviewReport};
use crate::core::scheduler::ReviewPolicy;
use crate::errors::AppResult;
use crate::models::Outcome;
use crate::ui::messages::{info, mastered, scheduled};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Review { id, result } = cmd {
        // reject unknown results before touching the store
        let outcome: Outcome = result.parse()?;

        let mut store = open_store(cfg)?;
        let now = date::now();
        let policy = ReviewPolicy::from_config(cfg);

        match ReviewLogic::apply(&mut store, *id, outcome, &policy, now)? {
            ReviewReport::Completed(p) => {
                mastered(format!("'{}' completed and removed!", p.name));
            }
            ReviewReport::Rescheduled { before, after } => {
                if !before.is_due(now) {
                    info(format!(
                        "'{}' was not due until {}.",
                        before.name,
                        before.due_date_str()
                    ));
                }
                scheduled(format!(
                    "Updated '{}': next review on {} (interval {} days), {} repetitions left.",
                    after.name,
                    after.due_date_str(),
                    after.current_interval,
                    after.repetitions_left
                ));
            }
        }
    }
    Ok(())
}
