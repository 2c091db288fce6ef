//! Explicit handle over the SQLite problem store.
//!
//! Each mutating call runs inside its own transaction together with its
//! audit line, so a returned `Ok` means the change is committed and a
//! failure leaves nothing behind.

use crate::core::scheduler::ReviewDecision;
use crate::db::{log, migrate, queries};
use crate::errors::{AppError, AppResult};
use crate::models::problem::DEFAULT_REPETITIONS;
use crate::models::{Outcome, Problem};
use crate::utils::date;
use chrono::NaiveDateTime;
use rusqlite::Connection;
use std::path::Path;

pub struct ProblemStore {
    conn: Connection,
}

impl ProblemStore {
    /// Open (or create) the database file and bring the schema up to date.
    pub fn open<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let conn = Connection::open(path.as_ref())?;
        Self::from_connection(conn)
    }

    /// Throwaway store, used by tests.
    pub fn open_in_memory() -> AppResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> AppResult<Self> {
        migrate::run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Track a new problem, due 14 days from now.
    pub fn add(&mut self, link: &str, repetitions: Option<i32>) -> AppResult<Problem> {
        self.add_at(link, repetitions, date::now())
    }

    pub fn add_at(
        &mut self,
        link: &str,
        repetitions: Option<i32>,
        now: NaiveDateTime,
    ) -> AppResult<Problem> {
        let link = link.trim();
        if link.is_empty() {
            return Err(AppError::invalid_input("link is required"));
        }

        let reps = repetitions.unwrap_or(DEFAULT_REPETITIONS);
        if reps < 1 {
            return Err(AppError::InvalidInput(format!(
                "repetitions must be at least 1 (got {})",
                reps
            )));
        }

        let mut problem = Problem::new(link, reps, now);

        let tx = self.conn.transaction()?;
        problem.id = queries::insert_problem(&tx, &problem)?;
        log::audit(
            &tx,
            "add",
            &format!("#{}", problem.id),
            &format!("{} ({} reps, due {})", problem.name, reps, problem.due_date_str()),
        )?;
        tx.commit()?;

        Ok(problem)
    }

    /// Every problem, earliest due date first.
    pub fn list_all(&self) -> AppResult<Vec<Problem>> {
        queries::load_all(&self.conn)
    }

    pub fn list_due(&self, now: &NaiveDateTime) -> AppResult<Vec<Problem>> {
        queries::load_due(&self.conn, now)
    }

    pub fn get(&self, id: i64) -> AppResult<Problem> {
        queries::load_problem(&self.conn, id)
    }

    pub fn update(&mut self, problem: &Problem) -> AppResult<()> {
        let tx = self.conn.transaction()?;
        queries::update_problem(&tx, problem)?;
        log::audit(
            &tx,
            "edit",
            &format!("#{}", problem.id),
            &format!(
                "due {}, interval {}d, {} reps left",
                problem.due_date_str(),
                problem.current_interval,
                problem.repetitions_left
            ),
        )?;
        tx.commit()?;
        Ok(())
    }

    pub fn delete(&mut self, id: i64) -> AppResult<()> {
        let tx = self.conn.transaction()?;
        queries::delete_problem(&tx, id)?;
        log::audit(&tx, "del", &format!("#{}", id), "Problem deleted")?;
        tx.commit()?;
        Ok(())
    }

    /// Persist a scheduler decision: drop the record when mastered,
    /// otherwise store the new interval, due date and repetitions.
    pub fn commit_review(&mut self, decision: &ReviewDecision, outcome: Outcome) -> AppResult<()> {
        let p = &decision.problem;
        let target = format!("#{}", p.id);

        let tx = self.conn.transaction()?;
        if decision.should_delete {
            queries::delete_problem(&tx, p.id)?;
            log::audit(
                &tx,
                "review",
                &target,
                &format!("{}: {} → completed and removed", p.name, outcome),
            )?;
        } else {
            queries::update_problem(&tx, p)?;
            log::audit(
                &tx,
                "review",
                &target,
                &format!(
                    "{}: {} → due {} (interval {}d, {} reps left)",
                    p.name,
                    outcome,
                    p.due_date_str(),
                    p.current_interval,
                    p.repetitions_left
                ),
            )?;
        }
        tx.commit()?;
        Ok(())
    }
}
