//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

/// Input rejected at the form or settings boundary, before anything is written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("end time {end} must be later than start time {start}")]
    EndNotAfterStart { start: String, end: String },

    #[error("hourly wage must be greater than 0 (got {0})")]
    NonPositiveWage(i64),

    #[error("break must be between 0 and 480 minutes (got {0})")]
    BreakOutOfRange(u32),

    #[error("payday must be a day between 1 and 31 (got {0})")]
    PaydayOutOfRange(u32),

    #[error("currency suffix cannot be empty")]
    EmptyCurrencySuffix,
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Ledger errors
    // ---------------------------
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("No shift found with id {0}")]
    NotFound(String),

    #[error("Id prefix '{0}' matches {1} shifts; use more characters")]
    AmbiguousId(String, usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
