#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use shiftbook::core::ShiftLedger;
use shiftbook::models::shift::ShiftFields;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated HOME + database for one test. Dropped with the test.
pub struct TestEnv {
    pub home: TempDir,
    pub db_path: String,
}

impl TestEnv {
    pub fn new() -> Self {
        let home = tempfile::tempdir().expect("tempdir");
        let db_path = home
            .path()
            .join("test_shiftbook.sqlite")
            .to_string_lossy()
            .to_string();
        Self { home, db_path }
    }

    /// Binary with HOME pointing at the temp dir and `--db` set.
    pub fn sb(&self) -> Command {
        let mut cmd = self.sb_no_db();
        cmd.args(["--db", &self.db_path]);
        cmd
    }

    /// Binary with HOME set but no `--db` (uses the configured database).
    pub fn sb_no_db(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("shiftbook");
        cmd.env("HOME", self.home.path());
        cmd.env_remove("APPDATA");
        cmd
    }

    pub fn config_file(&self) -> PathBuf {
        self.home.path().join(".shiftbook").join("shiftbook.conf")
    }

    pub fn out_file(&self, name: &str) -> String {
        self.home.path().join(name).to_string_lossy().to_string()
    }

    pub fn ledger(&self) -> ShiftLedger {
        ShiftLedger::open(&self.db_path).expect("open ledger")
    }

    /// Add a shift through the CLI.
    pub fn add(&self, date: &str, start: &str, end: &str, brk: u32, wage: i64) {
        self.sb()
            .args([
                "add",
                date,
                "--in",
                start,
                "--out",
                end,
                "--break",
                &brk.to_string(),
                "--wage",
                &wage.to_string(),
            ])
            .assert()
            .success();
    }

    /// Short id of the only shift logged on `date`.
    pub fn short_id_on(&self, date: &str) -> String {
        let ledger = self.ledger();
        let d = NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("date");
        let recs: Vec<_> = ledger
            .query(None, |r| r.date == d)
            .expect("query")
            .collect();
        assert_eq!(recs.len(), 1, "expected exactly one shift on {date}");
        recs[0].short_id()
    }
}

pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("datetime")
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date")
}

/// Fields for a same-day shift.
pub fn fields(date: &str, start: &str, end: &str, brk: u32, wage: i64) -> ShiftFields {
    ShiftFields {
        date: d(date),
        start_time: dt(&format!("{date} {start}")),
        end_time: dt(&format!("{date} {end}")),
        break_minutes: brk,
        hourly_wage: wage,
        memo: None,
    }
}
