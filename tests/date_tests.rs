use chrono::{NaiveDate, NaiveDateTime};
use rattendlog::utils::date::{last_days, parse_range, resolve_period, this_month, this_week};
use rattendlog::utils::time::{Zone, format_hms, normalize_timestamp, parse_timestamp};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn week_runs_monday_to_sunday() {
    // 2025-09-17 is a Wednesday
    assert_eq!(this_week(d("2025-09-17")), (d("2025-09-15"), d("2025-09-21")));
    // Sunday belongs to the week that started the previous Monday
    assert_eq!(this_week(d("2025-09-21")), (d("2025-09-15"), d("2025-09-21")));
    assert_eq!(this_week(d("2025-09-15")), (d("2025-09-15"), d("2025-09-21")));
}

#[test]
fn month_bounds_handle_leap_years() {
    assert_eq!(this_month(d("2024-02-10")), (d("2024-02-01"), d("2024-02-29")));
    assert_eq!(this_month(d("2025-02-10")), (d("2025-02-01"), d("2025-02-28")));
    assert_eq!(this_month(d("2025-12-31")), (d("2025-12-01"), d("2025-12-31")));
}

#[test]
fn last_seven_days_ends_today() {
    assert_eq!(last_days(d("2025-09-15"), 7), (d("2025-09-08"), d("2025-09-15")));
}

#[test]
fn ranges_and_periods() {
    assert_eq!(parse_range("2025").unwrap(), (d("2025-01-01"), d("2025-12-31")));
    assert_eq!(parse_range("2025-09").unwrap(), (d("2025-09-01"), d("2025-09-30")));
    assert_eq!(parse_range("2025-09-15").unwrap(), (d("2025-09-15"), d("2025-09-15")));
    assert_eq!(
        parse_range("2024-11:2025-02").unwrap(),
        (d("2024-11-01"), d("2025-02-28"))
    );

    assert!(parse_range("2025-09:2025").is_err());
    assert!(parse_range("2025-10-01:2025-09-01").is_err());
    assert!(parse_range("yesterday").is_err());
}

#[test]
fn period_shortcuts_resolve_against_today() {
    let today = d("2025-09-17");
    assert_eq!(resolve_period(None, today).unwrap(), (today, today));
    assert_eq!(resolve_period(Some("today"), today).unwrap(), (today, today));
    assert_eq!(resolve_period(Some("WEEK"), today).unwrap(), this_week(today));
    assert_eq!(resolve_period(Some("month"), today).unwrap(), this_month(today));
    assert_eq!(resolve_period(Some("last7"), today).unwrap(), last_days(today, 7));
}

#[test]
fn timestamps_parse_in_all_supported_shapes() {
    let expected =
        NaiveDateTime::parse_from_str("2025-09-15 09:05:00", "%Y-%m-%d %H:%M:%S").unwrap();

    assert_eq!(parse_timestamp("2025-09-15 09:05:00"), Some(expected));
    assert_eq!(parse_timestamp("2025-09-15T09:05:00"), Some(expected));
    assert_eq!(parse_timestamp("2025-09-15T09:05"), Some(expected));
    assert_eq!(parse_timestamp(" 2025-09-15 09:05 "), Some(expected));
    assert!(parse_timestamp("2025-09-15T09:05:00.250").is_some());

    assert_eq!(parse_timestamp("15/09/2025 09:05"), None);
    assert_eq!(parse_timestamp(""), None);

    assert_eq!(normalize_timestamp("2025-09-15 09:05"), "2025-09-15T09:05:00");
    assert_eq!(normalize_timestamp("garbage"), "garbage");
}

#[test]
fn clock_format_does_not_wrap_hours() {
    assert_eq!(format_hms(0), "00:00:00");
    assert_eq!(format_hms(28800), "08:00:00");
    assert_eq!(format_hms(3661), "01:01:01");
    assert_eq!(format_hms(90000), "25:00:00");
    assert_eq!(format_hms(-5), "00:00:00");
}

#[test]
fn zones_parse_offsets_and_local() {
    assert_eq!(Zone::parse("local").unwrap(), Zone::Local);
    assert_eq!(Zone::parse("+05:30").unwrap().to_string(), "+05:30");
    assert_eq!(Zone::parse("-0400").unwrap().to_string(), "-04:00");
    assert_eq!(Zone::parse("+01").unwrap().to_string(), "+01:00");
    assert_eq!(Zone::parse("UTC").unwrap().to_string(), "+00:00");

    assert!(Zone::parse("Asia/Kolkata").is_err());
    assert!(Zone::parse("+25:00").is_err());
    assert!(Zone::parse("05:30").is_err());
}
