use serde::Serialize;
use std::ops::Add;

/// Totals over a set of shifts.
/// `total_hours` is the sum of each record's worked hours, not a re-derivation
/// from summed intervals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ShiftSummary {
    pub count: usize,
    pub total_hours: f64,
    pub total_pay: i64,
}

impl Add for ShiftSummary {
    type Output = ShiftSummary;

    fn add(self, rhs: ShiftSummary) -> ShiftSummary {
        ShiftSummary {
            count: self.count + rhs.count,
            total_hours: self.total_hours + rhs.total_hours,
            total_pay: self.total_pay.saturating_add(rhs.total_pay),
        }
    }
}
