use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut ledger = open_ledger(cfg)?;

        let Some(rec) = DeleteLogic::find(&ledger, id)? else {
            info(format!("No shift matches '{}'; nothing to delete.", id));
            return Ok(());
        };

        if !*yes {
            let prompt = format!(
                "Delete shift {} on {} ({})? This action is irreversible.",
                rec.short_id(),
                rec.date_str(),
                rec.time_span()
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        if DeleteLogic::apply(&mut ledger, &rec)? {
            success(format!("Shift {} on {} has been deleted.", rec.short_id(), rec.date_str()));
        } else {
            info(format!("Shift {} was already gone.", rec.short_id()));
        }
    }

    Ok(())
}
