use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::aggregate;
use crate::errors::AppResult;
use crate::models::range::DateRange;
use crate::ui::messages::header;
use crate::ui::shift_view::{shift_table, summary_line};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, today } = cmd {
        let range = if *today {
            Some(DateRange::day(date::today()))
        } else {
            date::resolve_period(period.as_deref())?
        };

        let ledger = open_ledger(cfg)?;
        let records = ledger.list(range.as_ref())?;

        let title = match &range {
            Some(r) if r.from == r.to => format!("Shifts on {}", r.from),
            Some(r) => format!("Shifts from {} to {}", r.from, r.to),
            None => "All shifts".to_string(),
        };
        header(title);

        if records.is_empty() {
            println!("No shifts found.");
            return Ok(());
        }

        print!("{}", shift_table(&records, &cfg.currency_suffix));
        println!();
        println!(
            "Total: {}",
            summary_line(&aggregate(&records), &cfg.currency_suffix)
        );
    }

    Ok(())
}
