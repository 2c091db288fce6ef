use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = open_store(cfg)?;
        let path = Path::new(file);

        if let Some(count) = ExportLogic::export(&store, *format, path, *force, date::now())? {
            log::audit(
                store.conn(),
                "export",
                file,
                &format!("Exported {} problems as {}", count, format.as_str()),
            )?;
        }
    }
    Ok(())
}
