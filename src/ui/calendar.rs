//! Month grid rendering (Sunday-first, like a wall calendar).

use crate::models::shift::ShiftRecord;
use crate::utils::colors::{GREEN, INVERSE, RESET, color_for_weekday};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

const CELL: usize = 6;
const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Render the grid for `year`-`month`.
///
/// Each week takes two lines: day numbers, then the summed worked hours of
/// the days that have shifts. `today` is underlined with `*`, `selected` is
/// drawn in inverse video.
pub fn render_month_grid(
    year: i32,
    month: u32,
    by_day: &BTreeMap<u32, Vec<ShiftRecord>>,
    today: Option<u32>,
    selected: Option<u32>,
) -> String {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return String::new();
    };
    let days_in_month = crate::models::range::month_last_day(year, month).unwrap_or(28);
    let offset = first.weekday().num_days_from_sunday();

    let mut out = String::new();
    for (i, w) in WEEKDAYS.iter().enumerate() {
        let color = color_for_weekday(i as u32);
        out.push_str(&format!("{color}{w:>width$}{RESET}", width = CELL));
    }
    out.push('\n');

    let mut days_line = " ".repeat(CELL * offset as usize);
    let mut hours_line = " ".repeat(CELL * offset as usize);

    for day in 1..=days_in_month {
        let weekday = (offset + day - 1) % 7;
        let marker = if today == Some(day) { "*" } else { " " };
        let label = format!("{day:>width$}{marker}", width = CELL - 1);

        let cell = if selected == Some(day) {
            format!("{INVERSE}{label}{RESET}")
        } else {
            format!("{}{label}{RESET}", color_for_weekday(weekday))
        };
        days_line.push_str(&cell);

        match by_day.get(&day) {
            Some(records) => {
                let hours: f64 = records.iter().map(ShiftRecord::worked_hours).sum();
                let h = format!("{hours:.1}h");
                hours_line.push_str(&format!("{GREEN}{h:>width$}{RESET}", width = CELL));
            }
            None => hours_line.push_str(&" ".repeat(CELL)),
        }

        if weekday == 6 || day == days_in_month {
            out.push_str(days_line.trim_end());
            out.push('\n');
            out.push_str(hours_line.trim_end());
            out.push('\n');
            days_line.clear();
            hours_line.clear();
        }
    }

    out
}
