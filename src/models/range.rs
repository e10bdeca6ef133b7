use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Inclusive span of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> AppResult<Self> {
        if to < from {
            return Err(AppError::InvalidRange(format!("{from} is after {to}")));
        }
        Ok(Self { from, to })
    }

    pub fn day(d: NaiveDate) -> Self {
        Self { from: d, to: d }
    }

    pub fn month(year: i32, month: u32) -> AppResult<Self> {
        let from = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| AppError::InvalidRange(format!("{year}-{month:02}")))?;
        let last = month_last_day(year, month)
            .ok_or_else(|| AppError::InvalidRange(format!("{year}-{month:02}")))?;
        let to = NaiveDate::from_ymd_opt(year, month, last)
            .ok_or_else(|| AppError::InvalidRange(format!("{year}-{month:02}")))?;
        Ok(Self { from, to })
    }

    pub fn year(year: i32) -> AppResult<Self> {
        let from = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| AppError::InvalidRange(year.to_string()))?;
        let to = NaiveDate::from_ymd_opt(year, 12, 31)
            .ok_or_else(|| AppError::InvalidRange(year.to_string()))?;
        Ok(Self { from, to })
    }

    /// The month containing `d`.
    pub fn month_of(d: NaiveDate) -> AppResult<Self> {
        Self::month(d.year(), d.month())
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        self.from <= d && d <= self.to
    }

    /// Parse a period expression.
    ///
    /// Supports:
    /// - YYYY
    /// - YYYY-MM
    /// - YYYY-MM-DD
    /// - YYYY:YYYY
    /// - YYYY-MM:YYYY-MM
    /// - YYYY-MM-DD:YYYY-MM-DD
    ///
    /// `all` is handled by callers (no range at all).
    pub fn parse(r: &str) -> AppResult<Self> {
        if let Some((start_raw, end_raw)) = r.split_once(':') {
            let start = start_raw.trim();
            let end = end_raw.trim();

            if start.len() != end.len() {
                return Err(AppError::InvalidRange(
                    "start and end must have the same format".into(),
                ));
            }

            let first = Self::parse_single(start)?;
            let last = Self::parse_single(end)?;
            return Self::new(first.from, last.to);
        }

        Self::parse_single(r.trim())
    }

    fn parse_single(p: &str) -> AppResult<Self> {
        match p.len() {
            // YYYY
            4 => {
                let y: i32 = p
                    .parse()
                    .map_err(|_| AppError::InvalidRange(format!("invalid year '{p}'")))?;
                Self::year(y)
            }
            // YYYY-MM
            7 => {
                let d = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                    .map_err(|_| AppError::InvalidRange(format!("invalid month '{p}'")))?;
                Self::month(d.year(), d.month())
            }
            // YYYY-MM-DD
            10 => {
                let d = NaiveDate::parse_from_str(p, "%Y-%m-%d")
                    .map_err(|_| AppError::InvalidRange(format!("invalid date '{p}'")))?;
                Ok(Self::day(d))
            }
            _ => Err(AppError::InvalidRange(format!("unsupported period '{p}'"))),
        }
    }
}

pub fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
