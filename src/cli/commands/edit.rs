use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditChanges, EditLogic};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::ui::shift_view::shift_card;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date: new_date,
        start,
        end,
        break_minutes,
        wage,
        memo,
        clear_memo,
    } = cmd
    {
        let date = match new_date {
            Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
            None => None,
        };

        let changes = EditChanges {
            date,
            start: start.clone(),
            end: end.clone(),
            break_minutes: *break_minutes,
            wage: *wage,
            memo: memo.clone(),
            clear_memo: *clear_memo,
        };

        if changes.is_empty() {
            warning("Nothing to change: pass at least one of --date, --in, --out, --break, --wage, --memo, --clear-memo.");
            return Ok(());
        }

        let mut ledger = open_ledger(cfg)?;
        let rec = EditLogic::apply(&mut ledger, id, &changes)?;

        success(format!("Updated shift {} on {}.", rec.short_id(), rec.date_str()));
        print!("{}", shift_card(&rec, &cfg.currency_suffix));
    }

    Ok(())
}
