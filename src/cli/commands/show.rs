use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::shift_view::shift_card;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let ledger = open_ledger(cfg)?;
        let rec = ledger.get(&ledger.resolve_id(id)?)?;

        header(rec.date.format("%Y-%m-%d (%A)"));
        print!("{}", shift_card(&rec, &cfg.currency_suffix));
        println!("   id:      {}", rec.id);
        println!("   created: {}", rec.created_at);
        println!("   updated: {}", rec.updated_at);
    }

    Ok(())
}
