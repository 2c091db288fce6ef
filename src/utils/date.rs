use chrono::{Local, NaiveDate, NaiveDateTime, SubsecRound, TimeDelta};

/// Storage format for timestamps. Lexicographic order equals chronological
/// order, so `ORDER BY due_date` works on the text column.
pub const DB_DATETIME_FMT: &str = "%Y-%m-%dT%H:%M:%S";

/// Calendar date shown to the user and written by exports.
pub const DATE_FMT: &str = "%Y-%m-%d";

/// Local wall-clock time truncated to whole seconds, matching what the
/// store can round-trip.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

/// Latest due date the store accepts. Past year 9999 chrono prints a
/// signed year (`+10000-...`), which breaks text ordering.
pub fn max_due() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(9999, 12, 31)
        .and_then(|d| d.and_hms_opt(23, 59, 59))
        .unwrap_or(NaiveDateTime::MAX)
}

/// `from + days`, clamped to [`max_due`].
pub fn add_days(from: NaiveDateTime, days: i32) -> NaiveDateTime {
    let limit = max_due();
    TimeDelta::try_days(i64::from(days))
        .and_then(|delta| from.checked_add_signed(delta))
        .map_or(limit, |due| due.min(limit))
}

pub fn format_db(ts: &NaiveDateTime) -> String {
    ts.format(DB_DATETIME_FMT).to_string()
}

pub fn parse_db(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DB_DATETIME_FMT).ok()
}

/// Human hint for how far away a due date is: "today", "in 3 days",
/// "2 days overdue".
pub fn relative_days(due: NaiveDateTime, now: NaiveDateTime) -> String {
    let days = (due.date() - now.date()).num_days();
    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        -1 => "1 day overdue".to_string(),
        d if d > 1 => format!("in {} days", d),
        d => format!("{} days overdue", -d),
    }
}
