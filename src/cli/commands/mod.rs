pub mod add;
pub mod backup;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod review;
pub mod show;

use crate::config::Config;
use crate::db::ProblemStore;
use crate::errors::AppResult;

/// Open the configured store, creating the schema on first use.
pub(crate) fn open_store(cfg: &Config) -> AppResult<ProblemStore> {
    ProblemStore::open(cfg.database_path())
}
