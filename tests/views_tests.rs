use shiftbook::core::ShiftLedger;
use shiftbook::core::calendar::CalendarLogic;
use shiftbook::core::dashboard::{DashboardLogic, RECENT_LIMIT, next_payday, payday_in_month};
use shiftbook::errors::AppError;
use shiftbook::models::range::DateRange;
use shiftbook::ui::calendar::render_month_grid;
use shiftbook::ui::shift_view::summary_line;
use shiftbook::utils::time::parse_clock;
use shiftbook::utils::{currency_text, hours_text};

mod common;
use common::{d, dt, fields};

#[test]
fn test_next_payday() {
    assert_eq!(next_payday(d("2026-10-17"), 25), d("2026-10-25"));
    assert_eq!(next_payday(d("2026-10-25"), 25), d("2026-10-25"));
    assert_eq!(next_payday(d("2026-10-26"), 25), d("2026-11-25"));
    assert_eq!(next_payday(d("2026-12-26"), 25), d("2027-01-25"));
}

#[test]
fn test_payday_clamped_to_short_months() {
    assert_eq!(payday_in_month(2026, 2, 31), d("2026-02-28"));
    assert_eq!(payday_in_month(2028, 2, 30), d("2028-02-29"));
    assert_eq!(next_payday(d("2026-01-31"), 31), d("2026-01-31"));
    assert_eq!(next_payday(d("2026-02-01"), 31), d("2026-02-28"));
}

#[test]
fn test_dashboard_month_and_recent() {
    let mut ledger = ShiftLedger::in_memory().unwrap();
    ledger
        .create(fields("2026-09-30", "09:00", "18:00", 60, 12000))
        .unwrap();
    for day in 1..=6 {
        ledger
            .create(fields(&format!("2026-10-0{day}"), "09:00", "13:00", 0, 10000))
            .unwrap();
    }

    let dash = DashboardLogic::build(&ledger, d("2026-10-17"), 25).unwrap();

    assert_eq!(dash.month, DateRange::month(2026, 10).unwrap());
    assert_eq!(dash.summary.count, 6);
    assert_eq!(dash.summary.total_hours, 24.0);
    assert_eq!(dash.summary.total_pay, 240000);
    assert_eq!(dash.next_payday, d("2026-10-25"));

    assert_eq!(dash.recent.len(), RECENT_LIMIT);
    assert_eq!(dash.recent[0].date, d("2026-10-06"));
}

#[test]
fn test_dashboard_empty_ledger() {
    let ledger = ShiftLedger::in_memory().unwrap();
    let dash = DashboardLogic::build(&ledger, d("2026-10-17"), 25).unwrap();

    assert_eq!(dash.summary.count, 0);
    assert_eq!(dash.summary.total_pay, 0);
    assert!(dash.recent.is_empty());
}

#[test]
fn test_calendar_month_view() {
    let mut ledger = ShiftLedger::in_memory().unwrap();
    ledger
        .create(fields("2026-10-05", "09:00", "18:00", 60, 12000))
        .unwrap();
    ledger
        .create(fields("2026-10-05", "19:00", "21:00", 0, 12000))
        .unwrap();
    ledger
        .create(fields("2026-11-01", "09:00", "18:00", 60, 12000))
        .unwrap();

    let view = CalendarLogic::build(&ledger, 2026, 10, Some(5)).unwrap();

    assert_eq!(view.summary.count, 2);
    assert_eq!(view.by_day.len(), 1);
    assert_eq!(view.selected_records().len(), 2);

    let grid = render_month_grid(2026, 10, &view.by_day, None, None);
    assert!(grid.contains("10.0h"));
    // Oct 2026 starts on a Thursday: header + 5 weeks of two lines
    assert_eq!(grid.lines().count(), 11);
}

#[test]
fn test_calendar_rejects_day_outside_month() {
    let ledger = ShiftLedger::in_memory().unwrap();
    let err = CalendarLogic::build(&ledger, 2026, 9, Some(31)).unwrap_err();
    assert!(matches!(err, AppError::InvalidDate(_)));

    let view = CalendarLogic::build(&ledger, 2026, 9, Some(30)).unwrap();
    assert!(view.selected_records().is_empty());
}

#[test]
fn test_date_range_parse() {
    let y = DateRange::parse("2026").unwrap();
    assert_eq!((y.from, y.to), (d("2026-01-01"), d("2026-12-31")));

    let m = DateRange::parse("2026-02").unwrap();
    assert_eq!((m.from, m.to), (d("2026-02-01"), d("2026-02-28")));

    let r = DateRange::parse("2026-06-01:2026-06-10").unwrap();
    assert!(r.contains(d("2026-06-10")));
    assert!(!r.contains(d("2026-06-11")));

    let mr = DateRange::parse("2026-06:2026-08").unwrap();
    assert_eq!((mr.from, mr.to), (d("2026-06-01"), d("2026-08-31")));

    assert!(matches!(
        DateRange::parse("2026:2026-06"),
        Err(AppError::InvalidRange(_))
    ));
    assert!(matches!(
        DateRange::parse("2026-06-10:2026-06-01"),
        Err(AppError::InvalidRange(_))
    ));
    assert!(DateRange::parse("June").is_err());
}

#[test]
fn test_parse_clock_forms() {
    let day = d("2026-10-05");
    assert_eq!(parse_clock(day, "09:30").unwrap(), dt("2026-10-05 09:30"));
    assert_eq!(
        parse_clock(day, "2026-10-06 06:00").unwrap(),
        dt("2026-10-06 06:00")
    );
    assert!(parse_clock(day, "25:00").is_err());
}

#[test]
fn test_amount_and_hours_text() {
    assert_eq!(currency_text(96000, "원"), "96,000원");
    assert_eq!(currency_text(1234567, " KRW"), "1,234,567 KRW");
    assert_eq!(currency_text(0, "원"), "0원");
    assert_eq!(hours_text(7.5), "7.5h");

    let mut ledger = ShiftLedger::in_memory().unwrap();
    ledger
        .create(fields("2026-10-01", "09:00", "17:00", 0, 10030))
        .unwrap();
    ledger
        .create(fields("2026-10-02", "09:00", "17:00", 30, 10030))
        .unwrap();
    let s = shiftbook::core::aggregate(&ledger.list(None).unwrap());

    assert_eq!(summary_line(&s, "원"), "2 days | 15.5h | 155,465원");
}
