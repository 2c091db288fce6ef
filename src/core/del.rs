use crate::db::ProblemStore;
use crate::errors::AppResult;
use crate::models::Problem;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove a problem and hand back what was removed.
    /// Unknown (or already deleted) ids fail with `NotFound`.
    pub fn apply(store: &mut ProblemStore, id: i64) -> AppResult<Problem> {
        let problem = store.get(id)?;
        store.delete(id)?;
        Ok(problem)
    }
}
