use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::CalendarLogic;
use crate::errors::AppResult;
use crate::ui::calendar::render_month_grid;
use crate::ui::messages::header;
use crate::ui::shift_view::{shift_card, summary_line};
use crate::utils::date::{self, month_name};
use chrono::{Datelike, NaiveDate};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { month, day } = cmd {
        let today = date::today();
        let (year, m) = match month {
            Some(s) => date::parse_month(s)?,
            None => (today.year(), today.month()),
        };

        let ledger = open_ledger(cfg)?;
        let view = CalendarLogic::build(&ledger, year, m, *day)?;
        let suffix = &cfg.currency_suffix;

        header(format!("{} {}", month_name(m), year));
        println!("{}", summary_line(&view.summary, suffix));
        println!();

        let today_day = (today.year() == year && today.month() == m).then(|| today.day());
        print!(
            "{}",
            render_month_grid(year, m, &view.by_day, today_day, view.selected)
        );

        if let Some(d) = view.selected {
            println!();
            let label = NaiveDate::from_ymd_opt(year, m, d)
                .map(|nd| nd.format("%Y-%m-%d (%A)").to_string())
                .unwrap_or_default();
            header(label);

            let records = view.selected_records();
            if records.is_empty() {
                println!("No shifts on this day.");
            }
            for rec in records {
                print!("{}", shift_card(rec, suffix));
            }
        }
    }

    Ok(())
}
