use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::{ProblemStore, log};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = cfg.database_path();

    println!("⚙️  Initializing rRecall…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database    : {}", db_path.display());

    let store = ProblemStore::open(&db_path)?;

    // internal log is best effort
    if let Err(e) = log::audit(
        store.conn(),
        "init",
        "",
        &format!("Database initialized at {}", db_path.display()),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    success("rRecall initialization completed!");
    Ok(())
}
