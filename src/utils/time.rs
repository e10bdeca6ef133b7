//! Time utilities: parsing HH:MM and full timestamps for shift boundaries.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Parse a shift boundary.
///
/// - `HH:MM` is taken on `date`
/// - `YYYY-MM-DD HH:MM` (or `YYYY-MM-DDTHH:MM`) is taken as-is, which is how
///   an overnight shift gets an end on the following day
pub fn parse_clock(date: NaiveDate, input: &str) -> AppResult<NaiveDateTime> {
    let s = input.trim();

    if let Some(t) = parse_time(s) {
        return Ok(date.and_time(t));
    }

    for fmt in ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }

    Err(AppError::InvalidTime(input.to_string()))
}

/// Re-anchor an existing boundary on a new shift date, keeping the day offset
/// (an end on the next day stays on the next day).
pub fn move_to_date(ts: NaiveDateTime, old_date: NaiveDate, new_date: NaiveDate) -> NaiveDateTime {
    ts + (new_date - old_date)
}
