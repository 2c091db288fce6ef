use crate::db::ProblemStore;
use crate::errors::AppResult;
use crate::models::{Problem, ProblemView};
use crate::utils::colors::{color_for_due, color_for_repetitions, colorize};
use crate::utils::date::relative_days;
use crate::utils::table::{Column, Table};
use chrono::NaiveDateTime;

const NAME_MAX: usize = 40;
const LINK_MAX: usize = 60;

pub struct ListLogic;

impl ListLogic {
    /// Problems ordered by due date, split into (due, upcoming) at `now`.
    pub fn partition(
        store: &ProblemStore,
        now: NaiveDateTime,
    ) -> AppResult<(Vec<Problem>, Vec<Problem>)> {
        let all = store.list_all()?;
        Ok(all.into_iter().partition(|p| p.is_due(now)))
    }

    pub fn views(
        store: &ProblemStore,
        now: NaiveDateTime,
        only_due: bool,
    ) -> AppResult<Vec<ProblemView>> {
        let problems = if only_due {
            store.list_due(&now)?
        } else {
            store.list_all()?
        };
        Ok(problems.iter().map(|p| p.view(now)).collect())
    }

    pub fn render_table(problems: &[Problem], now: NaiveDateTime, color: bool) -> String {
        let mut table = Table::new(vec![
            Column::new("ID"),
            Column::new("NAME").max(NAME_MAX),
            Column::new("DUE"),
            Column::new("WHEN"),
            Column::new("INTERVAL"),
            Column::new("REPS"),
            Column::new("LINK").max(LINK_MAX),
        ]);

        for p in problems {
            let when = relative_days(p.due_date, now);
            let reps = p.repetitions_left.to_string();
            let (when, reps) = if color {
                (
                    colorize(&when, color_for_due(p.is_due(now))),
                    colorize(&reps, color_for_repetitions(p.repetitions_left)),
                )
            } else {
                (when, reps)
            };

            table.add_row(vec![
                p.id.to_string(),
                p.name.clone(),
                p.due_date_str(),
                when,
                format!("{}d", p.current_interval),
                reps,
                p.link.clone(),
            ]);
        }

        table.render()
    }
}
