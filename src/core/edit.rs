use crate::core::form::ShiftForm;
use crate::core::ledger::ShiftLedger;
use crate::db::log::ttlog_or_warn;
use crate::errors::AppResult;
use crate::models::shift::ShiftRecord;
use crate::utils::time::{move_to_date, parse_clock};
use chrono::NaiveDate;

/// Field overrides for the `edit` command. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct EditChanges {
    pub date: Option<NaiveDate>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub break_minutes: Option<u32>,
    pub wage: Option<i64>,
    pub memo: Option<String>,
    pub clear_memo: bool,
}

impl EditChanges {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.break_minutes.is_none()
            && self.wage.is_none()
            && self.memo.is_none()
            && !self.clear_memo
    }
}

pub struct EditLogic;

impl EditLogic {
    /// Form prefilled from `existing` with `changes` laid over it.
    ///
    /// Moving a shift to another date carries unchanged start/end times along
    /// (same clock time, same day offset). New `HH:MM` values are read on the
    /// resulting date.
    pub fn build_form(existing: &ShiftRecord, changes: &EditChanges) -> AppResult<ShiftForm> {
        let mut form = ShiftForm::for_existing(existing);

        if let Some(d) = changes.date {
            form.start = move_to_date(form.start, existing.date, d);
            form.end = move_to_date(form.end, existing.date, d);
            form.date = d;
        }
        if let Some(s) = &changes.start {
            form.start = parse_clock(form.date, s)?;
        }
        if let Some(e) = &changes.end {
            form.end = parse_clock(form.date, e)?;
        }
        if let Some(b) = changes.break_minutes {
            form.break_minutes = b;
        }
        if let Some(w) = changes.wage {
            form.hourly_wage = w;
        }
        if changes.clear_memo {
            form.memo = None;
        } else if let Some(m) = &changes.memo {
            form.memo = Some(m.clone());
        }

        Ok(form)
    }

    pub fn apply(
        ledger: &mut ShiftLedger,
        id_text: &str,
        changes: &EditChanges,
    ) -> AppResult<ShiftRecord> {
        let id = ledger.resolve_id(id_text)?;
        let existing = ledger.get(&id)?;

        let fields = Self::build_form(&existing, changes)?.validate()?;
        let rec = ledger.update(&id, fields)?;

        ttlog_or_warn(
            ledger.conn(),
            "edit",
            &rec.short_id(),
            &format!(
                "Updated shift on {} ({}, break {} min, wage {})",
                rec.date_str(),
                rec.time_span(),
                rec.break_minutes,
                rec.hourly_wage
            ),
        );

        Ok(rec)
    }
}
