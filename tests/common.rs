#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Isolated home directory + database for one test.
pub struct TestEnv {
    pub home: PathBuf,
    pub db: String,
}

impl TestEnv {
    /// Create a fresh directory inside the system temp dir (wiping leftovers)
    pub fn new(name: &str) -> Self {
        let home = env::temp_dir().join(format!("rrecall_test_{}", name));
        fs::remove_dir_all(&home).ok();
        fs::create_dir_all(&home).expect("create test home");
        let db = home.join("rrecall.sqlite").to_string_lossy().to_string();
        Self { home, db }
    }

    /// The binary, pointed at this environment's config dir and database.
    pub fn rr(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("rrecall");
        cmd.env("RRECALL_HOME", &self.home)
            .env("NO_COLOR", "1")
            .args(["--db", &self.db]);
        cmd
    }

    pub fn init(&self) {
        self.rr().args(["--test", "init"]).assert().success();
    }

    pub fn add(&self, link: &str) {
        self.rr().args(["add", link]).assert().success();
    }

    /// Path for an output file inside the test home
    pub fn out(&self, file: &str) -> String {
        self.home.join(file).to_string_lossy().to_string()
    }

    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.rr().args(args).output().expect("run rrecall");
        assert!(output.status.success(), "rrecall {:?} failed", args);
        String::from_utf8_lossy(&output.stdout).to_string()
    }
}

/// 2025-03-01 09:00:00, the fixed clock used by library tests.
pub fn t0() -> chrono::NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2025, 3, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

pub fn days_after(base: chrono::NaiveDateTime, days: i64) -> chrono::NaiveDateTime {
    base + chrono::TimeDelta::days(days)
}
