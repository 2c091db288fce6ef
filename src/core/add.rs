use crate::config::Config;
use crate::db::ProblemStore;
use crate::errors::AppResult;
use crate::models::Problem;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Track `link`; without `--reps` the configured default applies.
    pub fn apply(
        store: &mut ProblemStore,
        cfg: &Config,
        link: &str,
        reps: Option<i32>,
    ) -> AppResult<Problem> {
        let reps = reps.unwrap_or(cfg.default_repetitions);
        store.add(link, Some(reps))
    }
}
