use crate::db::queries::date_bounds;
use crate::errors::AppResult;
use crate::models::shift::DATE_FMT;
use crate::models::summary::ShiftSummary;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::{currency_text, hours_text};
use chrono::NaiveDate;
use rusqlite::Connection;
use std::fs;

pub fn print_db_info(
    conn: &Connection,
    db_path: &str,
    summary: &ShiftSummary,
    suffix: &str,
) -> AppResult<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    println!(
        "{}• Total shifts:{} {}{}{}",
        CYAN, RESET, GREEN, summary.count, RESET
    );
    println!(
        "{}• Total hours:{} {}",
        CYAN,
        RESET,
        hours_text(summary.total_hours)
    );
    println!(
        "{}• Total pay:{} {}",
        CYAN,
        RESET,
        currency_text(summary.total_pay, suffix)
    );

    let bounds = date_bounds(conn)?;

    println!("{}• Date range:{}", CYAN, RESET);
    match &bounds {
        Some((first, last)) => {
            println!("    from: {}", first);
            println!("    to:   {}", last);
        }
        None => {
            println!("    from: {GREY}--{RESET}");
            println!("    to:   {GREY}--{RESET}");
        }
    }

    if let Some((first, last)) = bounds
        && let (Ok(d1), Ok(d2)) = (
            NaiveDate::parse_from_str(&first, DATE_FMT),
            NaiveDate::parse_from_str(&last, DATE_FMT),
        )
    {
        let days = (d2 - d1).num_days() + 1;
        let avg = summary.total_hours / days as f64;
        println!("{}• Average hours/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
