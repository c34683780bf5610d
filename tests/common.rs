#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rattendlog::models::action::Action;
use rattendlog::models::action_log::ActionLogEntry;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a private directory so that a
/// real user configuration never leaks into the run.
pub fn rti() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("rattendlog_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rattendlog");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Init a test DB through the CLI
pub fn init_db(db_path: &str) {
    rti()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 15).unwrap()
}

/// Entry for staff "1001" on 2025-09-15 at `hms` (HH:MM:SS).
pub fn entry(action: Action, hms: &str) -> ActionLogEntry {
    ActionLogEntry::new("1001", day(), action, format!("2025-09-15 {}", hms))
}

pub fn cin(hms: &str) -> ActionLogEntry {
    entry(Action::CheckIn, hms).with_device(Some("web".into()))
}

pub fn cout(hms: &str) -> ActionLogEntry {
    entry(Action::CheckOut, hms).with_device(Some("android".into()))
}

pub fn ts(hms: &str) -> chrono::NaiveDateTime {
    chrono::NaiveDateTime::parse_from_str(&format!("2025-09-15 {}", hms), "%Y-%m-%d %H:%M:%S")
        .unwrap()
}
