use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, rti, setup_test_db, temp_out};

fn punch(db: &str, cmd: &str, staff: &str, at: &str, device: &str) {
    rti()
        .args(["--db", db, cmd, staff, "--at", at, "--device", device, "--by", "tester"])
        .assert()
        .success();
}

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates");

    rti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_checkin_checkout_and_status() {
    let db_path = setup_test_db("checkin_checkout_status");
    init_db(&db_path);

    punch(&db_path, "checkin", "1001", "2025-09-15 09:00:00", "web");
    punch(&db_path, "checkout", "1001", "2025-09-15 17:00:00", "android");

    rti()
        .args(["--db", &db_path, "status", "1001", "--date", "2025-09-15"])
        .assert()
        .success()
        .stdout(contains("09:00"))
        .stdout(contains("17:00"))
        .stdout(contains("WEB"))
        .stdout(contains("ANDROID"))
        .stdout(contains("08:00:00"))
        .stdout(contains("next: CHECK_IN"));
}

#[test]
fn test_status_shows_running_session() {
    let db_path = setup_test_db("status_running");
    init_db(&db_path);

    punch(&db_path, "checkin", "2002", "2025-09-15 09:00:00", "ios");

    rti()
        .args(["--db", &db_path, "status", "2002", "--date", "2025-09-15"])
        .assert()
        .success()
        .stdout(contains("Running"))
        .stdout(contains("--:--"))
        .stdout(contains("next: CHECK_OUT"));
}

#[test]
fn test_punch_toggles_between_actions() {
    let db_path = setup_test_db("punch_toggle");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "punch", "3003", "--at", "2025-09-15 08:00"])
        .assert()
        .success()
        .stdout(contains("Check-in recorded"));

    rti()
        .args(["--db", &db_path, "punch", "3003", "--at", "2025-09-15 12:30"])
        .assert()
        .success()
        .stdout(contains("Check-out recorded"));

    rti()
        .args(["--db", &db_path, "list", "--staff", "3003", "--period", "2025-09-15"])
        .assert()
        .success()
        .stdout(contains("2025-09-15"))
        .stdout(contains("04:30:00"));
}

#[test]
fn test_orphan_checkout_warns_and_is_ignored() {
    let db_path = setup_test_db("orphan_checkout");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "checkout", "4004", "--at", "2025-09-15 10:00"])
        .assert()
        .success()
        .stderr(contains("no open session"));

    punch(&db_path, "checkin", "4004", "2025-09-15 11:00", "web");
    punch(&db_path, "checkout", "4004", "2025-09-15 12:00", "web");

    rti()
        .args(["--db", &db_path, "list", "--staff", "4004", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("01:00:00"))
        .stdout(contains("1 sessions"));
}

#[test]
fn test_date_must_match_full_timestamp() {
    let db_path = setup_test_db("date_mismatch");
    init_db(&db_path);

    rti()
        .args([
            "--db",
            &db_path,
            "checkin",
            "1001",
            "--date",
            "2025-09-14",
            "--at",
            "2025-09-15 09:00",
        ])
        .assert()
        .failure()
        .stderr(contains("does not fall on"));
}

#[test]
fn test_invalid_time_is_rejected() {
    let db_path = setup_test_db("invalid_time");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "checkin", "1001", "--at", "9 o'clock"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_import_json_and_list_sessions() {
    let db_path = setup_test_db("import_json");
    init_db(&db_path);

    let input = temp_out("import_json_in", "json");
    fs::write(
        &input,
        r#"{"data":{"getActionLogs":[
            {"staffId":"5005","date":"2025-09-15","action":"CHECK_IN","timeStamp":"2025-09-15 09:00:00","device":"web","createdBy":"admin"},
            {"staffId":"5005","date":"2025-09-15","action":"CHECK_IN","timeStamp":"2025-09-15 13:00:00","device":"web","createdBy":"admin"},
            {"staffId":"5005","date":"2025-09-15","action":"CHECK_OUT","timeStamp":"2025-09-15 17:00:00","device":"ios","createdBy":"admin"}
        ]}}"#,
    )
    .unwrap();

    rti()
        .args(["--db", &db_path, "import", &input])
        .assert()
        .success()
        .stdout(contains("Imported 3 action log entries"));

    rti()
        .args([
            "--db", &db_path, "list", "--staff", "5005", "--period", "2025-09-15", "--sessions",
        ])
        .assert()
        .success()
        .stdout(contains("2 sessions"))
        .stdout(contains("04:00:00"))
        .stdout(contains("no check-out"));
}

#[test]
fn test_import_csv_with_malformed_timestamp() {
    let db_path = setup_test_db("import_csv_malformed");
    init_db(&db_path);

    let input = temp_out("import_csv_in", "csv");
    fs::write(
        &input,
        "staffId,date,action,timeStamp,device,createdBy\n\
         6006,2025-09-15,CHECK_IN,2025-09-15 09:00:00,web,\n\
         6006,2025-09-15,CHECK_OUT,yesterday-ish,web,\n\
         6006,2025-09-15,CHECK_OUT,2025-09-15 10:00:00,web,\n",
    )
    .unwrap();

    rti()
        .args(["--db", &db_path, "import", &input])
        .assert()
        .success()
        .stderr(contains("Malformed timestamp"));

    rti()
        .args(["--db", &db_path, "status", "6006", "--date", "2025-09-15"])
        .assert()
        .success()
        .stdout(contains("01:00:00"))
        .stderr(contains("skipped"));
}

#[test]
fn test_export_csv_and_refuse_overwrite() {
    let db_path = setup_test_db("export_csv");
    init_db(&db_path);

    punch(&db_path, "checkin", "7007", "2025-09-15 09:00:00", "web");
    punch(&db_path, "checkout", "7007", "2025-09-15 11:00:00", "web");
    punch(&db_path, "checkin", "7007", "2025-09-16 09:00:00", "ios");

    let out = temp_out("export_csv", "csv");

    rti()
        .args([
            "--db", &db_path, "export", "7007", "--format", "csv", "--file", &out, "--period",
            "2025-09",
        ])
        .assert()
        .success()
        .stdout(contains("export completed"));

    let content = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3, "header + 2 sessions");
    assert!(lines[0].starts_with("staff_id,date,start,end"));
    assert!(lines[1].contains("2025-09-15T09:00:00,2025-09-15T11:00:00"));
    assert!(lines[1].ends_with(",7200"));
    // open session: no end, no duration
    assert!(lines[2].contains("2025-09-16T09:00:00,,"));

    rti()
        .args([
            "--db", &db_path, "export", "7007", "--file", &out, "--period", "2025-09",
        ])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    init_db(&db_path);

    punch(&db_path, "checkin", "8008", "2025-09-15 09:00:00", "web");
    punch(&db_path, "checkout", "8008", "2025-09-15 09:30:00", "web");

    let out = temp_out("export_json", "json");

    rti()
        .args([
            "--db", &db_path, "export", "8008", "--format", "json", "--file", &out, "--period",
            "2025-09-15",
        ])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["duration_seconds"], 1800);
    assert_eq!(rows[0]["start_by"], "tester");
}

#[test]
fn test_log_print_records_operations() {
    let db_path = setup_test_db("log_print");
    init_db(&db_path);

    punch(&db_path, "checkin", "9009", "2025-09-15 09:00:00", "web");

    rti()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("checkin").and(contains("9009")))
        .stdout(contains("migration_applied"));
}

#[test]
fn test_list_unknown_period_fails() {
    let db_path = setup_test_db("list_bad_period");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "list", "--period", "fortnight"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}
