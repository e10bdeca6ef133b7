use crate::core::ledger::ShiftLedger;
use crate::db::log::ttlog_or_warn;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ShiftExport;
use crate::models::range::DateRange;
use crate::ui::messages::warning;
use crate::utils::path::{absolute_output_path, ensure_writable};

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export shifts, oldest first.
    ///
    /// - `file`: absolute output path (`~/` is expanded)
    /// - `range`: `None` exports the whole ledger
    ///
    /// Returns the number of exported shifts.
    pub fn export(
        ledger: &ShiftLedger,
        format: ExportFormat,
        file: &str,
        range: Option<&DateRange>,
        force: bool,
    ) -> AppResult<usize> {
        let path = absolute_output_path(file)?;
        ensure_writable(&path, force)?;

        let mut records = ledger.list(range)?;
        records.reverse();

        if records.is_empty() {
            warning("No shifts found for selected range.");
            return Ok(0);
        }

        let rows: Vec<ShiftExport> = records.iter().map(ShiftExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        ttlog_or_warn(
            ledger.conn(),
            "export",
            &path.to_string_lossy(),
            &format!("Exported {} shifts as {}", rows.len(), format.as_str()),
        );

        Ok(rows.len())
    }
}
