use shiftbook::core::ShiftLedger;
use shiftbook::core::add::{AddInput, AddLogic};
use shiftbook::core::edit::{EditChanges, EditLogic};
use shiftbook::core::form::ShiftForm;
use shiftbook::errors::{AppError, ValidationError};
use shiftbook::models::settings::Settings;

mod common;
use common::{d, dt, fields};

fn input(start: &str, end: &str) -> AddInput {
    AddInput {
        start: start.into(),
        end: end.into(),
        ..Default::default()
    }
}

#[test]
fn test_new_form_is_prefilled_from_settings() {
    let settings = Settings::default();
    let form = AddLogic::build_form(d("2026-10-05"), &input("09:00", "18:00"), &settings).unwrap();

    assert_eq!(form.hourly_wage, 10030);
    assert_eq!(form.break_minutes, 0);
    assert_eq!(form.start, dt("2026-10-05 09:00"));
    assert_eq!(form.end, dt("2026-10-05 18:00"));
}

#[test]
fn test_preview_matches_stored_values() {
    let settings = Settings::default();
    let mut inp = input("09:00", "18:00");
    inp.break_minutes = Some(60);
    inp.wage = Some(12000);

    let form = AddLogic::build_form(d("2026-10-05"), &inp, &settings).unwrap();
    assert_eq!(form.preview(), Some((8.0, 96000)));

    let mut ledger = ShiftLedger::in_memory().unwrap();
    let rec = AddLogic::apply(&mut ledger, form).unwrap();
    assert_eq!((rec.worked_hours(), rec.daily_pay()), (8.0, 96000));
}

#[test]
fn test_end_not_after_start_is_rejected() {
    let settings = Settings::default();
    let mut ledger = ShiftLedger::in_memory().unwrap();

    for (start, end) in [("18:00", "09:00"), ("09:00", "09:00")] {
        let form = AddLogic::build_form(d("2026-10-05"), &input(start, end), &settings).unwrap();
        assert!(!form.can_save());
        assert_eq!(form.preview(), None);

        let err = AddLogic::apply(&mut ledger, form).unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::EndNotAfterStart { .. })
        ));
    }

    assert!(ledger.list(None).unwrap().is_empty());
}

#[test]
fn test_non_positive_wage_is_rejected() {
    let settings = Settings::default();
    for wage in [0, -500] {
        let mut inp = input("09:00", "18:00");
        inp.wage = Some(wage);
        let form = AddLogic::build_form(d("2026-10-05"), &inp, &settings).unwrap();

        assert_eq!(
            form.validate().unwrap_err(),
            ValidationError::NonPositiveWage(wage)
        );
    }
}

#[test]
fn test_break_bounds() {
    let settings = Settings::default();
    let date = d("2026-10-05");

    let mut form = ShiftForm::for_new(date, dt("2026-10-05 08:00"), dt("2026-10-05 20:00"), &settings);
    form.break_minutes = 480;
    assert!(form.can_save());

    form.break_minutes = 481;
    assert_eq!(
        form.validate().unwrap_err(),
        ValidationError::BreakOutOfRange(481)
    );
}

#[test]
fn test_overnight_end_with_explicit_date() {
    let settings = Settings::default();
    let form = AddLogic::build_form(
        d("2026-10-05"),
        &input("22:00", "2026-10-06 06:00"),
        &settings,
    )
    .unwrap();

    assert!(form.can_save());
    assert_eq!(form.preview().map(|(h, _)| h), Some(8.0));
}

#[test]
fn test_invalid_clock_text() {
    let settings = Settings::default();
    let err = AddLogic::build_form(d("2026-10-05"), &input("9h", "18:00"), &settings).unwrap_err();
    assert!(matches!(err, AppError::InvalidTime(_)));
}

#[test]
fn test_wage_is_frozen_at_creation() {
    let mut ledger = ShiftLedger::in_memory().unwrap();

    let old = Settings::default();
    let form = AddLogic::build_form(d("2026-10-05"), &input("09:00", "17:00"), &old).unwrap();
    let rec = AddLogic::apply(&mut ledger, form).unwrap();

    let newer = Settings {
        default_hourly_wage: 12000,
        ..Settings::default()
    };
    let form = AddLogic::build_form(d("2026-10-06"), &input("09:00", "17:00"), &newer).unwrap();
    AddLogic::apply(&mut ledger, form).unwrap();

    assert_eq!(ledger.get(&rec.id).unwrap().hourly_wage, 10030);
    assert_eq!(ledger.get(&rec.id).unwrap().daily_pay(), 80240);

    // editing other fields keeps the stored wage
    let changes = EditChanges {
        memo: Some("covered for a coworker".into()),
        ..Default::default()
    };
    let edited = EditLogic::apply(&mut ledger, &rec.short_id(), &changes).unwrap();
    assert_eq!(edited.hourly_wage, 10030);
    assert_eq!(edited.memo.as_deref(), Some("covered for a coworker"));
}

#[test]
fn test_edit_form_prefills_existing_values() {
    let mut ledger = ShiftLedger::in_memory().unwrap();
    let mut f = fields("2026-10-05", "09:00", "18:00", 45, 11000);
    f.memo = Some("morning".into());
    let rec = ledger.create(f).unwrap();

    let form = ShiftForm::for_existing(&rec);
    assert_eq!(form.hourly_wage, 11000);
    assert_eq!(form.break_minutes, 45);
    assert_eq!(form.memo.as_deref(), Some("morning"));
}

#[test]
fn test_edit_moves_times_with_date() {
    let mut ledger = ShiftLedger::in_memory().unwrap();
    let mut f = fields("2026-10-05", "22:00", "22:00", 0, 10000);
    f.end_time = dt("2026-10-06 06:00");
    let rec = ledger.create(f).unwrap();

    let changes = EditChanges {
        date: Some(d("2026-10-10")),
        ..Default::default()
    };
    let edited = EditLogic::apply(&mut ledger, &rec.id.to_string(), &changes).unwrap();

    assert_eq!(edited.date, d("2026-10-10"));
    assert_eq!(edited.start_time, dt("2026-10-10 22:00"));
    assert_eq!(edited.end_time, dt("2026-10-11 06:00"));
    assert_eq!(edited.worked_hours(), 8.0);
}

#[test]
fn test_edit_rejects_invalid_and_keeps_record() {
    let mut ledger = ShiftLedger::in_memory().unwrap();
    let rec = ledger
        .create(fields("2026-10-05", "09:00", "18:00", 60, 12000))
        .unwrap();

    let changes = EditChanges {
        end: Some("08:00".into()),
        ..Default::default()
    };
    let err = EditLogic::apply(&mut ledger, &rec.short_id(), &changes).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    assert_eq!(ledger.get(&rec.id).unwrap(), rec);
}

#[test]
fn test_edit_clear_memo() {
    let mut ledger = ShiftLedger::in_memory().unwrap();
    let mut f = fields("2026-10-05", "09:00", "18:00", 0, 12000);
    f.memo = Some("note".into());
    let rec = ledger.create(f).unwrap();

    let changes = EditChanges {
        clear_memo: true,
        ..Default::default()
    };
    assert!(!changes.is_empty());
    assert!(EditChanges::default().is_empty());

    let edited = EditLogic::apply(&mut ledger, &rec.short_id(), &changes).unwrap();
    assert_eq!(edited.memo, None);
}

#[test]
fn test_settings_checks() {
    assert!(Settings::check_wage(1).is_ok());
    assert_eq!(
        Settings::check_wage(0).unwrap_err(),
        ValidationError::NonPositiveWage(0)
    );
    assert!(Settings::check_payday(1).is_ok());
    assert!(Settings::check_payday(31).is_ok());
    assert_eq!(
        Settings::check_payday(0).unwrap_err(),
        ValidationError::PaydayOutOfRange(0)
    );
    assert_eq!(
        Settings::check_payday(32).unwrap_err(),
        ValidationError::PaydayOutOfRange(32)
    );
}
