use crate::errors::AppError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Result of a single review attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    #[serde(rename = "success")]
    Success,
    #[serde(rename = "fail")]
    Failure,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Failure => "fail",
        }
    }
}

impl FromStr for Outcome {
    type Err = AppError;

    /// Accepts `success` or `fail` / `failure`, case-insensitive.
    /// Anything else is rejected instead of being read as a failure.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "success" => Ok(Outcome::Success),
            "fail" | "failure" => Ok(Outcome::Failure),
            other => Err(AppError::InvalidInput(format!(
                "unknown review result '{}' (expected 'success' or 'fail')",
                other
            ))),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
