//! Input boundary for the add and edit paths.
//! Nothing reaches the ledger unless `validate` accepts it.

use crate::errors::ValidationError;
use crate::models::settings::Settings;
use crate::models::shift::{ShiftFields, ShiftRecord, calculate_hours, calculate_pay, worked_seconds};
use chrono::{NaiveDate, NaiveDateTime};

pub const MAX_BREAK_MINUTES: u32 = 480;

#[derive(Debug, Clone, PartialEq)]
pub struct ShiftForm {
    pub date: NaiveDate,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub break_minutes: u32,
    pub hourly_wage: i64,
    pub memo: Option<String>,
}

impl ShiftForm {
    /// Empty form for a new shift, wage prefilled from settings.
    pub fn for_new(
        date: NaiveDate,
        start: NaiveDateTime,
        end: NaiveDateTime,
        settings: &Settings,
    ) -> Self {
        Self {
            date,
            start,
            end,
            break_minutes: 0,
            hourly_wage: settings.default_hourly_wage,
            memo: None,
        }
    }

    /// Form prefilled with an existing record, including its frozen wage.
    pub fn for_existing(rec: &ShiftRecord) -> Self {
        Self {
            date: rec.date,
            start: rec.start_time,
            end: rec.end_time,
            break_minutes: rec.break_minutes,
            hourly_wage: rec.hourly_wage,
            memo: rec.memo.clone(),
        }
    }

    pub fn can_save(&self) -> bool {
        self.check().is_ok()
    }

    /// Worked hours and pay as they would be stored, or `None` while the
    /// form is not saveable.
    pub fn preview(&self) -> Option<(f64, i64)> {
        if !self.can_save() {
            return None;
        }
        let hours = calculate_hours(self.start, self.end, self.break_minutes);
        let seconds = worked_seconds(self.start, self.end, self.break_minutes);
        Some((hours, calculate_pay(seconds, self.hourly_wage)))
    }

    pub fn validate(self) -> Result<ShiftFields, ValidationError> {
        self.check()?;
        Ok(ShiftFields {
            date: self.date,
            start_time: self.start,
            end_time: self.end,
            break_minutes: self.break_minutes,
            hourly_wage: self.hourly_wage,
            memo: self.memo,
        })
    }

    fn check(&self) -> Result<(), ValidationError> {
        if self.end <= self.start {
            return Err(ValidationError::EndNotAfterStart {
                start: self.start.format("%Y-%m-%d %H:%M").to_string(),
                end: self.end.format("%Y-%m-%d %H:%M").to_string(),
            });
        }
        Settings::check_wage(self.hourly_wage)?;
        if self.break_minutes > MAX_BREAK_MINUTES {
            return Err(ValidationError::BreakOutOfRange(self.break_minutes));
        }
        Ok(())
    }
}
