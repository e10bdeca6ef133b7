use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::TestEnv;

#[test]
fn test_init_creates_config_and_db() {
    let env = TestEnv::new();

    env.sb_no_db()
        .args(["init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(env.config_file().exists());
    assert!(
        env.home
            .path()
            .join(".shiftbook")
            .join("shiftbook.sqlite")
            .exists()
    );
}

#[test]
fn test_add_and_list_month() {
    let env = TestEnv::new();
    env.add("2026-10-05", "09:00", "18:00", 60, 12000);

    env.sb()
        .args(["list", "--period", "2026-10"])
        .assert()
        .success()
        .stdout(contains("2026-10-05"))
        .stdout(contains("8.0h"))
        .stdout(contains("96,000원"))
        .stdout(contains("1 days | 8.0h | 96,000원"));
}

#[test]
fn test_add_prints_card() {
    let env = TestEnv::new();

    env.sb()
        .args([
            "add", "2026-10-05", "--in", "09:00", "--out", "18:00", "--break", "60", "--wage",
            "12000", "--memo", "opening shift",
        ])
        .assert()
        .success()
        .stdout(contains("Added shift"))
        .stdout(contains("09:00 ~ 18:00"))
        .stdout(contains("opening shift"));
}

#[test]
fn test_add_rejects_end_before_start() {
    let env = TestEnv::new();

    env.sb()
        .args(["add", "2026-10-05", "--in", "18:00", "--out", "09:00"])
        .assert()
        .failure()
        .stderr(contains("must be later than start time"));

    env.sb()
        .args(["list", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("No shifts found."));
}

#[test]
fn test_add_rejects_zero_wage_and_long_break() {
    let env = TestEnv::new();

    env.sb()
        .args([
            "add", "2026-10-05", "--in", "09:00", "--out", "18:00", "--wage", "0",
        ])
        .assert()
        .failure()
        .stderr(contains("hourly wage must be greater than 0"));

    env.sb()
        .args([
            "add", "2026-10-05", "--in", "09:00", "--out", "18:00", "--break", "500",
        ])
        .assert()
        .failure()
        .stderr(contains("break must be between 0 and 480"));
}

#[test]
fn test_add_preview_does_not_save() {
    let env = TestEnv::new();

    env.sb()
        .args([
            "add", "2026-10-05", "--in", "09:00", "--out", "18:00", "--break", "60", "--wage",
            "12000", "--preview",
        ])
        .assert()
        .success()
        .stdout(contains("8.0h"))
        .stdout(contains("96,000원"));

    assert!(env.ledger().list(None).unwrap().is_empty());
}

#[test]
fn test_add_preview_reports_the_failing_rule() {
    let env = TestEnv::new();

    env.sb()
        .args([
            "add", "2026-10-05", "--in", "09:00", "--out", "18:00", "--break", "500",
            "--preview",
        ])
        .assert()
        .success()
        .stdout(contains("break must be between 0 and 480 minutes (got 500)"));

    env.sb()
        .args([
            "add", "2026-10-05", "--in", "09:00", "--out", "10:20", "--break", "10", "--wage",
            "12000", "--preview",
        ])
        .assert()
        .success()
        .stdout(contains("14,000원"));

    assert!(env.ledger().list(None).unwrap().is_empty());
}

#[test]
fn test_add_overnight_shift() {
    let env = TestEnv::new();

    env.sb()
        .args([
            "add",
            "2026-10-05",
            "--in",
            "22:00",
            "--out",
            "2026-10-06 06:00",
            "--wage",
            "10000",
        ])
        .assert()
        .success();

    env.sb()
        .args(["list", "--period", "2026-10-05"])
        .assert()
        .success()
        .stdout(contains("22:00 ~ 10-06 06:00"))
        .stdout(contains("80,000원"));
}

#[test]
fn test_list_range_and_all() {
    let env = TestEnv::new();
    env.add("2025-09-15", "09:00", "17:00", 30, 10000);
    env.add("2026-06-18", "09:00", "17:00", 30, 10000);
    env.add("2026-10-05", "09:00", "17:00", 30, 10000);

    env.sb()
        .args(["list", "--period", "2026-06:2026-10"])
        .assert()
        .success()
        .stdout(contains("2026-06-18"))
        .stdout(contains("2026-10-05"))
        .stdout(contains("2025-09-15").not());

    env.sb()
        .args(["list", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("3 days | 22.5h | 225,000원"));

    env.sb()
        .args(["list", "--period", "2026-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid range"));
}

#[test]
fn test_edit_changes_wage_only_for_that_shift() {
    let env = TestEnv::new();
    env.add("2026-10-05", "09:00", "18:00", 60, 12000);
    env.add("2026-10-06", "09:00", "18:00", 60, 12000);
    let id = env.short_id_on("2026-10-05");

    env.sb()
        .args(["edit", &id, "--wage", "13000"])
        .assert()
        .success()
        .stdout(contains("Updated shift"))
        .stdout(contains("104,000원"));

    env.sb()
        .args(["list", "--period", "2026-10"])
        .assert()
        .success()
        .stdout(contains("2 days | 16.0h | 200,000원"));
}

#[test]
fn test_edit_invalid_keeps_record() {
    let env = TestEnv::new();
    env.add("2026-10-05", "09:00", "18:00", 60, 12000);
    let id = env.short_id_on("2026-10-05");

    env.sb()
        .args(["edit", &id, "--out", "08:00"])
        .assert()
        .failure()
        .stderr(contains("Validation error"));

    env.sb()
        .args(["show", &id])
        .assert()
        .success()
        .stdout(contains("09:00 ~ 18:00"))
        .stdout(contains("96,000원"));
}

#[test]
fn test_edit_unknown_id_fails() {
    let env = TestEnv::new();
    env.add("2026-10-05", "09:00", "18:00", 60, 12000);

    env.sb()
        .args([
            "edit",
            "00000000-0000-4000-8000-000000000000",
            "--wage",
            "13000",
        ])
        .assert()
        .failure()
        .stderr(contains("No shift found"));
}

#[test]
fn test_edit_without_changes_warns() {
    let env = TestEnv::new();
    env.add("2026-10-05", "09:00", "18:00", 60, 12000);
    let id = env.short_id_on("2026-10-05");

    env.sb()
        .args(["edit", &id])
        .assert()
        .success()
        .stdout(contains("Nothing to change"));
}

#[test]
fn test_show_prints_full_id() {
    let env = TestEnv::new();
    env.add("2026-10-05", "09:00", "18:00", 60, 12000);

    let rec = env.ledger().list(None).unwrap().remove(0);

    env.sb()
        .args(["show", &rec.short_id()])
        .assert()
        .success()
        .stdout(contains(rec.id.to_string()))
        .stdout(contains("2026-10-05"));
}

#[test]
fn test_del_is_idempotent() {
    let env = TestEnv::new();
    env.add("2026-10-05", "09:00", "18:00", 60, 12000);
    let id = env.short_id_on("2026-10-05");

    env.sb()
        .args(["del", &id, "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    env.sb()
        .args(["del", &id, "--yes"])
        .assert()
        .success()
        .stdout(contains("nothing to delete"));

    assert!(env.ledger().list(None).unwrap().is_empty());
}

#[test]
fn test_del_cancelled_keeps_record() {
    let env = TestEnv::new();
    env.add("2026-10-05", "09:00", "18:00", 60, 12000);
    let id = env.short_id_on("2026-10-05");

    env.sb()
        .args(["del", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    assert_eq!(env.ledger().list(None).unwrap().len(), 1);
}

#[test]
fn test_dashboard_runs() {
    let env = TestEnv::new();

    env.sb()
        .args(["dashboard"])
        .assert()
        .success()
        .stdout(contains("Next payday"))
        .stdout(contains("No shifts logged yet"));
}

#[test]
fn test_calendar_with_selected_day() {
    let env = TestEnv::new();
    env.add("2026-10-05", "09:00", "18:00", 60, 12000);

    env.sb()
        .args(["calendar", "--month", "2026-10", "--day", "5"])
        .assert()
        .success()
        .stdout(contains("October 2026"))
        .stdout(contains("8.0h"))
        .stdout(contains("2026-10-05 (Monday)"))
        .stdout(contains("96,000원"));

    env.sb()
        .args(["calendar", "--month", "2026-09", "--day", "31"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn test_log_records_operations() {
    let env = TestEnv::new();
    env.add("2026-10-05", "09:00", "18:00", 60, 12000);

    env.sb()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("Added shift on 2026-10-05"));
}

#[test]
fn test_db_info_and_check() {
    let env = TestEnv::new();
    env.add("2026-10-05", "09:00", "18:00", 60, 12000);

    env.sb()
        .args(["db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Total shifts:"))
        .stdout(contains("96,000원"))
        .stdout(contains("Integrity check passed"));

    env.sb()
        .args(["db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Schema is up to date"));
}

#[test]
fn test_backup_plain_and_zip() {
    let env = TestEnv::new();
    env.add("2026-10-05", "09:00", "18:00", 60, 12000);

    let plain = env.out_file("backup.sqlite");
    env.sb()
        .args(["backup", "--file", &plain])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(std::path::Path::new(&plain).exists());

    let zipped = env.out_file("backup_zip.sqlite");
    env.sb()
        .args(["backup", "--file", &zipped, "--compress"])
        .assert()
        .success();
    assert!(env.home.path().join("backup_zip.zip").exists());
}
