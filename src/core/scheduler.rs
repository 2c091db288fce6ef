//! Review scheduling.
//!
//! Exponential backoff on success, reset to one day on failure:
//!
//! | outcome | repetitions_left        | current_interval | due_date              |
//! |---------|-------------------------|------------------|-----------------------|
//! | success | −1 (delete when ≤ 0)    | ×2               | now + interval days   |
//! | fail    | unchanged (or max)      | 1                | now + 1 day           |
//!
//! Everything here is pure: the clock is an argument and nothing touches
//! the store.

use crate::config::Config;
use crate::models::{Outcome, Problem};
use crate::utils::date;
use chrono::NaiveDateTime;

/// Interval (days) after a failed review.
pub const RESET_INTERVAL_DAYS: i32 = 1;

/// Tunables of the review rule that are left to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewPolicy {
    /// A failed review restores `repetitions_left` to the problem's
    /// `max_repetitions`.
    pub reset_repetitions_on_fail: bool,
}

impl ReviewPolicy {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            reset_repetitions_on_fail: cfg.reset_repetitions_on_fail,
        }
    }
}

/// The rescheduled record plus whether it reached mastery and must go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDecision {
    pub problem: Problem,
    pub should_delete: bool,
}

/// Compute the state of `problem` after a review with `outcome` at `now`.
pub fn apply_review(
    problem: &Problem,
    outcome: Outcome,
    now: NaiveDateTime,
    policy: &ReviewPolicy,
) -> ReviewDecision {
    let mut next = problem.clone();

    match outcome {
        Outcome::Success => {
            next.repetitions_left -= 1;
            if next.repetitions_left <= 0 {
                // mastered: interval and due date are irrelevant
                return ReviewDecision {
                    problem: next,
                    should_delete: true,
                };
            }

            next.current_interval = next.current_interval.saturating_mul(2).max(1);
            next.due_date = date::add_days(now, next.current_interval);
        }
        Outcome::Failure => {
            next.current_interval = RESET_INTERVAL_DAYS;
            next.due_date = date::add_days(now, RESET_INTERVAL_DAYS);
            if policy.reset_repetitions_on_fail {
                next.repetitions_left = next.max_repetitions.max(next.repetitions_left).max(1);
            }
        }
    }

    ReviewDecision {
        problem: next,
        should_delete: false,
    }
}
