use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::Serialize;
use uuid::Uuid;

/// Storage format for start/end timestamps (⇔ shifts.start_time / shifts.end_time).
pub const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";
pub const DATE_FMT: &str = "%Y-%m-%d";

/// Net seconds worked between `start` and `end` once the break is removed.
/// Never negative: a break as long as the shift or longer yields 0.
pub fn worked_seconds(start: NaiveDateTime, end: NaiveDateTime, break_minutes: u32) -> i64 {
    let interval = (end - start).num_seconds();
    (interval - i64::from(break_minutes) * 60).max(0)
}

/// Net hours worked, for display and summaries.
pub fn calculate_hours(start: NaiveDateTime, end: NaiveDateTime, break_minutes: u32) -> f64 {
    worked_seconds(start, end, break_minutes) as f64 / 3600.0
}

/// Pay for `seconds` of work at `wage` per hour, truncated to a whole
/// currency unit. Integer arithmetic, so 70 minutes at 12000 is exactly 14000.
pub fn calculate_pay(seconds: i64, wage: i64) -> i64 {
    let pay = i128::from(seconds.max(0)) * i128::from(wage) / 3600;
    i64::try_from(pay).unwrap_or(i64::MAX)
}

/// Every mutable field of a shift. Used by both the create and the update path.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftFields {
    pub date: NaiveDate,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub break_minutes: u32,
    pub hourly_wage: i64,
    pub memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftRecord {
    pub id: Uuid,                    // ⇔ shifts.id (TEXT, hyphenated UUID)
    pub date: NaiveDate,             // ⇔ shifts.date (TEXT "YYYY-MM-DD")
    pub start_time: NaiveDateTime,   // ⇔ shifts.start_time
    pub end_time: NaiveDateTime,     // ⇔ shifts.end_time
    pub break_minutes: u32,          // ⇔ shifts.break_minutes
    pub hourly_wage: i64,            // ⇔ shifts.hourly_wage, frozen at creation
    pub memo: Option<String>,        // ⇔ shifts.memo (NULL when empty)
    pub created_at: String,          // ⇔ shifts.created_at (RFC 3339)
    pub updated_at: String,          // ⇔ shifts.updated_at (RFC 3339)
}

impl ShiftRecord {
    /// Build a brand new record with a fresh id.
    pub fn new(fields: ShiftFields) -> Self {
        let now = Local::now().to_rfc3339();
        Self {
            id: Uuid::new_v4(),
            date: fields.date,
            start_time: fields.start_time,
            end_time: fields.end_time,
            break_minutes: fields.break_minutes,
            hourly_wage: fields.hourly_wage,
            memo: normalize_memo(fields.memo),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Overwrite every mutable field; `id` and `created_at` are kept.
    pub fn apply(&mut self, fields: ShiftFields) {
        self.date = fields.date;
        self.start_time = fields.start_time;
        self.end_time = fields.end_time;
        self.break_minutes = fields.break_minutes;
        self.hourly_wage = fields.hourly_wage;
        self.memo = normalize_memo(fields.memo);
        self.updated_at = Local::now().to_rfc3339();
    }

    pub fn worked_seconds(&self) -> i64 {
        worked_seconds(self.start_time, self.end_time, self.break_minutes)
    }

    pub fn worked_hours(&self) -> f64 {
        calculate_hours(self.start_time, self.end_time, self.break_minutes)
    }

    pub fn daily_pay(&self) -> i64 {
        calculate_pay(self.worked_seconds(), self.hourly_wage)
    }

    /// First 8 characters of the id, enough to address a shift from the CLI.
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }

    pub fn date_str(&self) -> String {
        self.date.format(DATE_FMT).to_string()
    }

    /// "09:00 ~ 18:00", with the end date spelled out when the shift crosses midnight.
    pub fn time_span(&self) -> String {
        let start = self.start_time.format("%H:%M");
        if self.end_time.date() == self.start_time.date() {
            format!("{} ~ {}", start, self.end_time.format("%H:%M"))
        } else {
            format!("{} ~ {}", start, self.end_time.format("%m-%d %H:%M"))
        }
    }
}

fn normalize_memo(memo: Option<String>) -> Option<String> {
    memo.and_then(|m| {
        let trimmed = m.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
