pub mod add;
pub mod backup;
pub mod calendar;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod show;

use crate::config::Config;
use crate::core::ledger::ShiftLedger;
use crate::errors::AppResult;

/// Open the configured database, applying pending migrations.
pub(crate) fn open_ledger(cfg: &Config) -> AppResult<ShiftLedger> {
    ShiftLedger::open(&cfg.database)
}
