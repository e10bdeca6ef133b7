use crate::models::shift::ShiftRecord;
use serde::Serialize;

/// Flat export row: stored fields plus the derived hours and pay.
#[derive(Serialize, Clone, Debug)]
pub struct ShiftExport {
    pub id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub break_minutes: u32,
    pub hourly_wage: i64,
    pub worked_hours: f64,
    pub daily_pay: i64,
    pub memo: String,
}

impl From<&ShiftRecord> for ShiftExport {
    fn from(rec: &ShiftRecord) -> Self {
        Self {
            id: rec.id.to_string(),
            date: rec.date_str(),
            start_time: rec.start_time.format("%Y-%m-%d %H:%M").to_string(),
            end_time: rec.end_time.format("%Y-%m-%d %H:%M").to_string(),
            break_minutes: rec.break_minutes,
            hourly_wage: rec.hourly_wage,
            // two decimals are plenty for a spreadsheet
            worked_hours: (rec.worked_hours() * 100.0).round() / 100.0,
            daily_pay: rec.daily_pay(),
            memo: rec.memo.clone().unwrap_or_default(),
        }
    }
}
