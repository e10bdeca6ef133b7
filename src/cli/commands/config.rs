use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{migrate_config_file, missing_keys};
use crate::core::config::ConfigLogic;
use crate::db::log::ttlog_or_warn;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
        set_wage,
        set_payday,
        set_currency,
    } = cmd
    {
        let path = Config::config_file();

        // ---- SETTERS ----
        if set_wage.is_some() || set_payday.is_some() || set_currency.is_some() {
            // start from the file, so a --db override is never persisted
            let mut updated = Config::load()?;
            let mut changes = Vec::new();

            if let Some(w) = set_wage {
                updated.set_default_wage(*w)?;
                changes.push(format!("default_hourly_wage={}", w));
            }
            if let Some(d) = set_payday {
                updated.set_payday(*d)?;
                changes.push(format!("payday_day_of_month={}", d));
            }
            if let Some(s) = set_currency {
                updated.set_currency_suffix(s)?;
                changes.push(format!("currency_suffix={}", updated.currency_suffix));
            }

            updated.save()?;
            success(format!("Settings updated: {}", changes.join(", ")));

            if let Ok(ledger) = open_ledger(cfg) {
                ttlog_or_warn(ledger.conn(), "config", "settings", &changes.join(", "));
            }
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            let saved = Config::load()?;
            println!("📄 Configuration file ({}):\n", path.display());
            let yaml =
                serde_yaml::to_string(&saved).map_err(|e| AppError::Config(e.to_string()))?;
            println!("{}", yaml);

            if cfg.database != saved.database {
                info(format!("Database overridden by --db for this run: {}", cfg.database));
            }
        }

        // ---- CHECK / MIGRATE ----
        if *check || *migrate {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {}. Run `shiftbook init` first.",
                    path.display()
                ));
                return Ok(());
            }

            if *check {
                let missing = missing_keys(&path)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!("Missing keys: {}", missing.join(", ")));
                    info("Run `shiftbook config --migrate` to add them with default values.");
                }
            }

            if *migrate {
                let added = migrate_config_file(&path)?;
                if added.is_empty() {
                    info("Configuration already up to date.");
                } else {
                    success(format!("Added keys: {}", added.join(", ")));
                }
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let used = ConfigLogic::edit(&path, editor.as_deref())?;
            success(format!(
                "Configuration file edited successfully using '{}'",
                used
            ));
        }
    }

    Ok(())
}
