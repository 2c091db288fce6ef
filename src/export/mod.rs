mod fs_utils;
mod json_csv;

use crate::db::ProblemStore;
use crate::errors::AppResult;
use crate::ui::messages::success;
use chrono::NaiveDateTime;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write every tracked problem (as listed, earliest due first) to `path`.
    ///
    /// Returns the number of exported rows, or `None` when the user declined
    /// to overwrite an existing file.
    pub fn export(
        store: &ProblemStore,
        format: ExportFormat,
        path: &Path,
        force: bool,
        now: NaiveDateTime,
    ) -> AppResult<Option<usize>> {
        if !fs_utils::ensure_writable(path, force)? {
            return Ok(None);
        }

        let rows: Vec<_> = store.list_all()?.iter().map(|p| p.view(now)).collect();

        match format {
            ExportFormat::Csv => json_csv::export_csv(&rows, path)?,
            ExportFormat::Json => json_csv::export_json(&rows, path)?,
        }

        success(format!(
            "{} export completed: {} ({} problems)",
            format.as_str().to_uppercase(),
            path.display(),
            rows.len()
        ));
        Ok(Some(rows.len()))
    }
}
