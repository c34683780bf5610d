//! Time utilities: timestamp parsing, timezone handling, elapsed-time formatting.

use crate::errors::{AppError, AppResult};
use chrono::{FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use std::fmt;

/// Canonical storage format for timestamps (seconds precision, `T` separator).
pub const TIMESTAMP_FMT: &str = "%Y-%m-%dT%H:%M:%S";

/// Storage format: like `TIMESTAMP_FMT`, keeping any fractional seconds.
/// Still sorts chronologically as plain text.
pub const STORED_TIMESTAMP_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse an action-log timestamp.
///
/// Accepts a space or `T` between date and time, with or without seconds,
/// and an optional fractional part. No offset is expected: the value is a
/// naive wall-clock time.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim().replacen(' ', "T", 1);

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&s, fmt).ok())
}

/// Normalize a timestamp to the storage format.
/// Unparseable values are returned as they are.
pub fn normalize_timestamp(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(ts) => ts.format(STORED_TIMESTAMP_FMT).to_string(),
        None => raw.to_string(),
    }
}

pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FMT).to_string()
}

/// Parse HH:MM or HH:MM:SS
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

/// `HH:MM` of a timestamp, `--:--` when absent.
pub fn format_hm(ts: Option<NaiveDateTime>) -> String {
    match ts {
        Some(t) => t.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}

/// Elapsed seconds as `HH:MM:SS`. Hours are not wrapped at 24.
pub fn format_hms(secs: i64) -> String {
    let s = secs.max(0);
    format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}

/// Whole seconds from `start` to `end`, clamped at zero.
pub fn seconds_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_seconds().max(0)
}

/// Zone in which wall-clock timestamps are read and "now" is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Local,
    Fixed(FixedOffset),
}

impl Zone {
    /// `local`, `Z`/`UTC`, or an offset such as `+05:30`, `-0400`, `+01`.
    pub fn parse(s: &str) -> AppResult<Self> {
        let t = s.trim();
        let invalid = || AppError::InvalidTimezone(s.to_string());

        if t.eq_ignore_ascii_case("local") {
            return Ok(Zone::Local);
        }
        if t.eq_ignore_ascii_case("utc") || t == "Z" {
            return FixedOffset::east_opt(0).map(Zone::Fixed).ok_or_else(invalid);
        }

        let (sign, rest) = match t.chars().next() {
            Some('+') => (1, &t[1..]),
            Some('-') => (-1, &t[1..]),
            _ => return Err(invalid()),
        };

        let digits: String = rest.chars().filter(|c| *c != ':').collect();
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let (h, m) = match digits.len() {
            2 => (digits.parse::<i32>().map_err(|_| invalid())?, 0),
            4 => (
                digits[0..2].parse::<i32>().map_err(|_| invalid())?,
                digits[2..4].parse::<i32>().map_err(|_| invalid())?,
            ),
            _ => return Err(invalid()),
        };

        if h > 23 || m > 59 {
            return Err(invalid());
        }

        FixedOffset::east_opt(sign * (h * 3600 + m * 60))
            .map(Zone::Fixed)
            .ok_or_else(invalid)
    }

    /// Current wall-clock time in this zone.
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Zone::Local => Local::now().naive_local(),
            Zone::Fixed(off) => Utc::now().with_timezone(off).naive_local(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Local => f.write_str("local"),
            Zone::Fixed(off) => write!(f, "{}", off),
        }
    }
}
