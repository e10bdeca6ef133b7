use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddInput, AddLogic};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::ui::shift_view::shift_card;
use crate::utils::date;
use crate::utils::{currency_text, hours_text};

/// Log a new shift.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        break_minutes,
        wage,
        memo,
        preview,
    } = cmd
    {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let settings = cfg.settings();

        let input = AddInput {
            start: start.clone(),
            end: end.clone(),
            break_minutes: *break_minutes,
            wage: *wage,
            memo: memo.clone(),
        };

        let form = AddLogic::build_form(d, &input, &settings)?;

        if *preview {
            match form.clone().validate() {
                Err(e) => warning(format!("This shift cannot be saved: {}", e)),
                Ok(_) => {
                    if let Some((hours, pay)) = form.preview() {
                        info(format!(
                            "Preview for {}: {} → {}",
                            d,
                            hours_text(hours),
                            currency_text(pay, &settings.currency_suffix)
                        ));
                    }
                }
            }
            return Ok(());
        }

        let mut ledger = open_ledger(cfg)?;
        let rec = AddLogic::apply(&mut ledger, form)?;

        success(format!("Added shift {} on {}.", rec.short_id(), rec.date_str()));
        print!("{}", shift_card(&rec, &settings.currency_suffix));
    }

    Ok(())
}
