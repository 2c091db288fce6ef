use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut store = open_store(cfg)?;

        // fail on unknown ids before prompting
        let problem = store.get(*id)?;

        if !*yes
            && !ask_confirmation(&format!(
                "Delete #{} '{}'? This action is irreversible.",
                problem.id, problem.name
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = DeleteLogic::apply(&mut store, *id)?;
        success(format!("Problem #{} '{}' has been deleted.", removed.id, removed.name));
    }

    Ok(())
}
