use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        // no --range means the whole ledger
        let bounds = match range {
            None => None,
            Some(r) => date::resolve_period(Some(r))?,
        };

        let ledger = open_ledger(cfg)?;
        ExportLogic::export(&ledger, *format, file, bounds.as_ref(), *force)?;
    }
    Ok(())
}
