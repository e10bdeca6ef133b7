use crate::core::ledger::ShiftLedger;
use crate::db::log::ttlog_or_warn;
use crate::errors::{AppError, AppResult};
use crate::models::shift::ShiftRecord;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Look up the shift addressed by `id_text`. An id that matches nothing
    /// is `Ok(None)`, so deleting twice is harmless.
    pub fn find(ledger: &ShiftLedger, id_text: &str) -> AppResult<Option<ShiftRecord>> {
        let id = match ledger.resolve_id(id_text) {
            Ok(id) => id,
            Err(AppError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        };

        match ledger.get(&id) {
            Ok(rec) => Ok(Some(rec)),
            Err(AppError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn apply(ledger: &mut ShiftLedger, rec: &ShiftRecord) -> AppResult<bool> {
        let removed = ledger.delete(&rec.id)?;

        if removed {
            ttlog_or_warn(
                ledger.conn(),
                "del",
                &rec.short_id(),
                &format!("Deleted shift on {} ({})", rec.date_str(), rec.time_span()),
            );
        }

        Ok(removed)
    }
}
