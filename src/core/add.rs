use crate::core::form::ShiftForm;
use crate::core::ledger::ShiftLedger;
use crate::db::log::ttlog_or_warn;
use crate::errors::AppResult;
use crate::models::settings::Settings;
use crate::models::shift::ShiftRecord;
use crate::utils::time::parse_clock;
use chrono::NaiveDate;

/// Raw values from the add command, before the form is built.
#[derive(Debug, Clone, Default)]
pub struct AddInput {
    pub start: String,
    pub end: String,
    pub break_minutes: Option<u32>,
    pub wage: Option<i64>,
    pub memo: Option<String>,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Build the form for a new shift on `date`. When no wage is given the
    /// default from settings is used; the record keeps that value even if the
    /// default changes later.
    pub fn build_form(date: NaiveDate, input: &AddInput, settings: &Settings) -> AppResult<ShiftForm> {
        let start = parse_clock(date, &input.start)?;
        let end = parse_clock(date, &input.end)?;

        let mut form = ShiftForm::for_new(date, start, end, settings);
        if let Some(b) = input.break_minutes {
            form.break_minutes = b;
        }
        if let Some(w) = input.wage {
            form.hourly_wage = w;
        }
        form.memo = input.memo.clone();

        Ok(form)
    }

    /// Validate and store. Nothing is written when validation fails.
    pub fn apply(ledger: &mut ShiftLedger, form: ShiftForm) -> AppResult<ShiftRecord> {
        let fields = form.validate()?;
        let rec = ledger.create(fields)?;

        ttlog_or_warn(
            ledger.conn(),
            "add",
            &rec.short_id(),
            &format!(
                "Added shift on {} ({}, break {} min, wage {})",
                rec.date_str(),
                rec.time_span(),
                rec.break_minutes,
                rec.hourly_wage
            ),
        );

        Ok(rec)
    }
}
