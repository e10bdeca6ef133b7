use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftbook
#[derive(Parser)]
#[command(
    name = "shiftbook",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log part-time shifts, compute wages and review monthly summaries using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or change settings (default wage, payday, currency)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,

        /// Default hourly wage used to prefill new shifts
        #[arg(long = "set-wage", value_name = "WAGE")]
        set_wage: Option<i64>,

        /// Payday (day of month, 1-31), display only
        #[arg(long = "set-payday", value_name = "DAY")]
        set_payday: Option<u32>,

        /// Currency suffix shown after amounts (e.g. "원", " KRW")
        #[arg(long = "set-currency", value_name = "SUFFIX")]
        set_currency: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Log a new shift
    Add {
        /// Date the shift is logged against (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM, or "YYYY-MM-DD HH:MM")
        #[arg(long = "in")]
        start: String,

        /// End time (HH:MM, or "YYYY-MM-DD HH:MM" for overnight shifts)
        #[arg(long = "out")]
        end: String,

        /// Break in minutes (0-480)
        #[arg(long = "break", value_name = "MINUTES")]
        break_minutes: Option<u32>,

        /// Hourly wage for this shift (defaults to the configured wage)
        #[arg(long = "wage")]
        wage: Option<i64>,

        /// Optional note
        #[arg(long = "memo")]
        memo: Option<String>,

        /// Show hours and pay without saving
        #[arg(long = "preview")]
        preview: bool,
    },

    /// Change an existing shift
    Edit {
        /// Shift id (full UUID or a unique prefix, at least 4 characters)
        id: String,

        #[arg(long = "date", help = "New date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "in", help = "New start time (HH:MM or \"YYYY-MM-DD HH:MM\")")]
        start: Option<String>,

        #[arg(long = "out", help = "New end time (HH:MM or \"YYYY-MM-DD HH:MM\")")]
        end: Option<String>,

        #[arg(long = "break", value_name = "MINUTES", help = "New break in minutes")]
        break_minutes: Option<u32>,

        #[arg(long = "wage", help = "New hourly wage for this shift only")]
        wage: Option<i64>,

        #[arg(long = "memo", conflicts_with = "clear_memo", help = "New memo")]
        memo: Option<String>,

        #[arg(long = "clear-memo", help = "Remove the memo")]
        clear_memo: bool,
    },

    /// Show one shift
    Show {
        /// Shift id (full UUID or a unique prefix)
        id: String,
    },

    /// Delete a shift
    Del {
        /// Shift id (full UUID or a unique prefix)
        id: String,

        /// Do not ask for confirmation
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// List shifts of a period
    List {
        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2026")
        /// - YYYY-MM              → entire month (e.g. "2026-06")
        /// - YYYY-MM-DD           → specific day (e.g. "2026-06-18")
        ///
        /// Ranges (start:end) in the same format:
        /// - YYYY-MM:YYYY-MM      → month range (e.g. "2026-06:2026-08")
        /// - YYYY-MM-DD:YYYY-MM-DD→ day range (e.g. "2026-06-01:2026-06-10")
        ///
        /// Special value:
        /// - all                   → the whole ledger
        ///
        /// If omitted, the current month is shown.
        #[arg(long, short)]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's shifts")]
        today: bool,
    },

    /// This month at a glance: days, hours, expected pay, recent shifts
    Dashboard,

    /// Month calendar with worked hours per day
    Calendar {
        /// Month to show (YYYY-MM), default current month
        #[arg(long, short)]
        month: Option<String>,

        /// Day of the month to show in detail
        #[arg(long, short)]
        day: Option<u32>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Write a .zip archive instead of a plain copy")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Export shifts to CSV or JSON
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range (default: all)"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
