use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::{ProblemStore, log};
use crate::errors::AppResult;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let db_path = cfg.database_path();
        if let Some(written) = BackupLogic::backup(&db_path, Path::new(file), *compress, *force)? {
            let store = ProblemStore::open(&db_path)?;
            log::audit(
                store.conn(),
                "backup",
                &written.to_string_lossy(),
                if *compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            )?;
        }
    }

    Ok(())
}
