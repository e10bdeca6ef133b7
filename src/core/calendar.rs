use crate::core::aggregate::{aggregate, group_by_calendar_day};
use crate::core::ledger::ShiftLedger;
use crate::errors::{AppError, AppResult};
use crate::models::range::DateRange;
use crate::models::shift::ShiftRecord;
use crate::models::summary::ShiftSummary;
use chrono::Datelike;
use std::collections::BTreeMap;

/// One month of the calendar view.
#[derive(Debug, Clone)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub summary: ShiftSummary,
    pub by_day: BTreeMap<u32, Vec<ShiftRecord>>,
    pub selected: Option<u32>,
}

impl MonthView {
    /// Records of the selected day, empty when no day is selected.
    pub fn selected_records(&self) -> &[ShiftRecord] {
        self.selected
            .and_then(|d| self.by_day.get(&d))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

pub struct CalendarLogic;

impl CalendarLogic {
    pub fn build(
        ledger: &ShiftLedger,
        year: i32,
        month: u32,
        selected: Option<u32>,
    ) -> AppResult<MonthView> {
        let range = DateRange::month(year, month)?;

        if let Some(d) = selected
            && !(1..=range.to.day()).contains(&d)
        {
            return Err(AppError::InvalidDate(format!("{year}-{month:02}-{d:02}")));
        }

        let records = ledger.in_month(year, month)?;
        let summary = aggregate(&records);

        Ok(MonthView {
            year,
            month,
            summary,
            by_day: group_by_calendar_day(records),
            selected,
        })
    }
}
