//! Text renderings of shifts and summaries shared by several commands.

use crate::models::shift::ShiftRecord;
use crate::models::summary::ShiftSummary;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET};
use crate::utils::table::{Column, Table};
use crate::utils::{currency_text, hours_text};

/// Multi-line detail card for one shift.
pub fn shift_card(rec: &ShiftRecord, suffix: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{CYAN}🕘 {}{RESET}  {}  {GREY}[{}]{RESET}\n",
        rec.time_span(),
        hours_text(rec.worked_hours()),
        rec.short_id()
    ));
    out.push_str(&format!(
        "   {GREEN}{}{RESET}  (wage {}, break {} min)\n",
        currency_text(rec.daily_pay(), suffix),
        currency_text(rec.hourly_wage, suffix),
        rec.break_minutes
    ));
    if let Some(memo) = &rec.memo {
        out.push_str(&format!("   📝 {memo}\n"));
    }
    out
}

/// Table of shifts, one row each.
pub fn shift_table(records: &[ShiftRecord], suffix: &str) -> String {
    let mut table = Table::new(vec![
        Column::left("ID"),
        Column::left("DATE"),
        Column::left("TIME"),
        Column::right("BREAK"),
        Column::right("WAGE"),
        Column::right("HOURS"),
        Column::right("PAY"),
        Column::left("MEMO"),
    ]);

    for rec in records {
        table.add_row(vec![
            rec.short_id(),
            rec.date.format("%Y-%m-%d %a").to_string(),
            rec.time_span(),
            format!("{}m", rec.break_minutes),
            currency_text(rec.hourly_wage, suffix),
            hours_text(rec.worked_hours()),
            currency_text(rec.daily_pay(), suffix),
            rec.memo.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }

    table.render()
}

/// "3 days | 24.0h | 240,720원"
pub fn summary_line(summary: &ShiftSummary, suffix: &str) -> String {
    format!(
        "{} days | {} | {}",
        summary.count,
        hours_text(summary.total_hours),
        currency_text(summary.total_pay, suffix)
    )
}
