use crate::core::scheduler::{self, ReviewPolicy};
use crate::db::ProblemStore;
use crate::errors::AppResult;
use crate::models::{Outcome, Problem};
use chrono::NaiveDateTime;

/// What a review did to the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewReport {
    /// Last repetition passed: the problem was removed.
    Completed(Problem),
    /// The problem stays, with its new schedule.
    Rescheduled { before: Problem, after: Problem },
}

impl ReviewReport {
    pub fn is_completed(&self) -> bool {
        matches!(self, ReviewReport::Completed(_))
    }
}

pub struct ReviewLogic;

impl ReviewLogic {
    /// Load the problem, run the scheduler and persist the decision.
    pub fn apply(
        store: &mut ProblemStore,
        id: i64,
        outcome: Outcome,
        policy: &ReviewPolicy,
        now: NaiveDateTime,
    ) -> AppResult<ReviewReport> {
        let before = store.get(id)?;
        let decision = scheduler::apply_review(&before, outcome, now, policy);

        store.commit_review(&decision, outcome)?;

        Ok(if decision.should_delete {
            ReviewReport::Completed(decision.problem)
        } else {
            ReviewReport::Rescheduled {
                before,
                after: decision.problem,
            }
        })
    }
}
