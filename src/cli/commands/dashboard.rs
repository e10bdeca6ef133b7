use crate::cli::commands::open_ledger;
use crate::config::Config;
use crate::core::dashboard::DashboardLogic;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::shift_view::shift_table;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use crate::utils::date::{self, month_name};
use crate::utils::{currency_text, hours_text};
use chrono::Datelike;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let ledger = open_ledger(cfg)?;
    let settings = cfg.settings();
    let today = date::today();

    let dash = DashboardLogic::build(&ledger, today, settings.payday_day_of_month)?;

    header(format!(
        "Dashboard: {} {}",
        month_name(dash.month.from.month()),
        dash.month.from.year()
    ));

    println!("{CYAN}• Days worked:{RESET}   {}", dash.summary.count);
    println!(
        "{CYAN}• Hours worked:{RESET}  {}",
        hours_text(dash.summary.total_hours)
    );
    println!(
        "{CYAN}• Expected pay:{RESET}  {GREEN}{}{RESET}",
        currency_text(dash.summary.total_pay, &settings.currency_suffix)
    );
    println!(
        "{CYAN}• Next payday:{RESET}   {YELLOW}{}{RESET} ({} days)",
        dash.next_payday,
        (dash.next_payday - today).num_days()
    );
    println!();

    println!("Recent shifts:");
    if dash.recent.is_empty() {
        println!("No shifts logged yet. Use `shiftbook add` to log your first shift.");
    } else {
        print!("{}", shift_table(&dash.recent, &settings.currency_suffix));
    }

    Ok(())
}
