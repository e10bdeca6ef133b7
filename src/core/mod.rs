pub mod add;
pub mod aggregate;
pub mod backup;
pub mod calendar;
pub mod config;
pub mod dashboard;
pub mod del;
pub mod edit;
pub mod form;
pub mod ledger;
pub mod log;

pub use aggregate::{aggregate, group_by_calendar_day};
pub use ledger::ShiftLedger;
