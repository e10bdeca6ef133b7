use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::ledger::ShiftLedger;
use crate::db::log::ttlog_or_warn;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (existing settings are kept)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref())?;
    let db_str = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing shiftbook…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", db_str);

    let ledger = ShiftLedger::open(&db_str)?;

    println!("✅ Database initialized at {}", db_str);

    ttlog_or_warn(
        ledger.conn(),
        "init",
        "Database initialized",
        &format!("Database initialized at {}", db_str),
    );

    println!("🎉 shiftbook initialization completed!");
    Ok(())
}
