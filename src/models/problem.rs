//! Problem record and its serialized listing row.

use crate::utils::date::{self, DATE_FMT};
use crate::utils::name::extract_name;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Repetitions assigned when the caller does not provide any.
pub const DEFAULT_REPETITIONS: i32 = 3;

/// Interval (days) of a freshly added problem.
pub const INITIAL_INTERVAL_DAYS: i32 = 14;

/// A tracked practice problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    pub id: i64,
    pub name: String,
    pub link: String,
    pub due_date: NaiveDateTime,
    pub repetitions_left: i32,
    /// Repetitions the problem started with.
    pub max_repetitions: i32,
    pub current_interval: i32, // days
}

impl Problem {
    /// Build a new, not yet persisted problem (`id == 0`).
    /// The name is derived from the link once, here.
    pub fn new(link: &str, repetitions: i32, now: NaiveDateTime) -> Self {
        Self {
            id: 0,
            name: extract_name(link),
            link: link.to_string(),
            due_date: date::add_days(now, INITIAL_INTERVAL_DAYS),
            repetitions_left: repetitions,
            max_repetitions: repetitions,
            current_interval: INITIAL_INTERVAL_DAYS,
        }
    }

    pub fn is_due(&self, now: NaiveDateTime) -> bool {
        now >= self.due_date
    }

    pub fn due_date_str(&self) -> String {
        self.due_date.format(DATE_FMT).to_string()
    }

    pub fn view(&self, now: NaiveDateTime) -> ProblemView {
        ProblemView {
            id: self.id,
            name: self.name.clone(),
            link: self.link.clone(),
            due_date: self.due_date_str(),
            is_due: self.is_due(now),
            repetitions_left: self.repetitions_left,
            current_interval: self.current_interval,
        }
    }
}

/// Flat row used by `list --json`, `show --json` and exports.
/// `is_due` is computed when the view is built and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemView {
    pub id: i64,
    pub name: String,
    pub link: String,
    pub due_date: String,
    pub is_due: bool,
    pub repetitions_left: i32,
    pub current_interval: i32,
}
