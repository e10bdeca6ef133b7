use crate::core::aggregate::aggregate;
use crate::core::ledger::ShiftLedger;
use crate::errors::AppResult;
use crate::models::range::{DateRange, month_last_day};
use crate::models::shift::ShiftRecord;
use crate::models::summary::ShiftSummary;
use chrono::{Datelike, Months, NaiveDate};

pub const RECENT_LIMIT: usize = 5;

/// Everything the dashboard shows, computed from one snapshot.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub month: DateRange,
    pub summary: ShiftSummary,
    pub next_payday: NaiveDate,
    pub recent: Vec<ShiftRecord>,
}

pub struct DashboardLogic;

impl DashboardLogic {
    pub fn build(ledger: &ShiftLedger, today: NaiveDate, payday: u32) -> AppResult<Dashboard> {
        let month = DateRange::month_of(today)?;
        let this_month = ledger.list(Some(&month))?;
        let recent = ledger.query(None, |_| true)?.take(RECENT_LIMIT).collect();

        Ok(Dashboard {
            month,
            summary: aggregate(&this_month),
            next_payday: next_payday(today, payday),
            recent,
        })
    }
}

/// The payday in `year`-`month`, moved back to the last day for short months.
pub fn payday_in_month(year: i32, month: u32, payday: u32) -> NaiveDate {
    let last = month_last_day(year, month).unwrap_or(28);
    NaiveDate::from_ymd_opt(year, month, payday.clamp(1, last))
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default())
}

/// First payday on or after `today`.
pub fn next_payday(today: NaiveDate, payday: u32) -> NaiveDate {
    let this_month = payday_in_month(today.year(), today.month(), payday);
    if this_month >= today {
        return this_month;
    }

    let next = today
        .with_day(1)
        .and_then(|d| d.checked_add_months(Months::new(1)))
        .unwrap_or(today);
    payday_in_month(next.year(), next.month(), payday)
}
