use crate::models::shift::ShiftRecord;
use crate::models::summary::ShiftSummary;
use chrono::Datelike;
use std::collections::BTreeMap;

/// Count, summed worked hours and summed pay over `records`.
/// The pay total saturates at `i64::MAX` instead of overflowing.
pub fn aggregate<'a, I>(records: I) -> ShiftSummary
where
    I: IntoIterator<Item = &'a ShiftRecord>,
{
    records
        .into_iter()
        .fold(ShiftSummary::default(), |acc, rec| ShiftSummary {
            count: acc.count + 1,
            total_hours: acc.total_hours + rec.worked_hours(),
            total_pay: acc.total_pay.saturating_add(rec.daily_pay()),
        })
}

/// Bucket records by the day of month of their `date`.
/// Input order is kept inside each bucket.
pub fn group_by_calendar_day<I>(records: I) -> BTreeMap<u32, Vec<ShiftRecord>>
where
    I: IntoIterator<Item = ShiftRecord>,
{
    let mut out: BTreeMap<u32, Vec<ShiftRecord>> = BTreeMap::new();
    for rec in records {
        out.entry(rec.date.day()).or_default().push(rec);
    }
    out
}
