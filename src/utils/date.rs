//! Date utilities: period parsing and the quick ranges (today, this week,
//! this month, last N days).

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, Months, NaiveDate};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Monday..Sunday of the week containing `day`.
pub fn this_week(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = day - Days::new(day.weekday().num_days_from_monday() as u64);
    (monday, monday + Days::new(6))
}

/// First..last day of the month containing `day`.
pub fn this_month(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = day.with_day(1).unwrap_or(day);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .unwrap_or(first);
    (first, last)
}

/// From `n` days before `day` up to `day`, both included.
pub fn last_days(day: NaiveDate, n: u64) -> (NaiveDate, NaiveDate) {
    (day - Days::new(n), day)
}

/// Resolve a `--period` value relative to `today`.
///
/// Accepts the shortcuts `today`, `week`, `month`, `last7`, or anything
/// [`parse_range`] understands.
pub fn resolve_period(period: Option<&str>, today: NaiveDate) -> AppResult<(NaiveDate, NaiveDate)> {
    match period.map(|p| p.trim().to_ascii_lowercase()).as_deref() {
        None | Some("today") => Ok((today, today)),
        Some("week") => Ok(this_week(today)),
        Some("month") => Ok(this_month(today)),
        Some("last7") => Ok(last_days(today, 7)),
        Some(other) => parse_range(other),
    }
}

/// Parse a period or a range.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidPeriod(r.to_string());

    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(invalid());
        }

        let (d1, _) = period_bounds(start).ok_or_else(invalid)?;
        let (_, d2) = period_bounds(end).ok_or_else(invalid)?;

        if d2 < d1 {
            return Err(invalid());
        }
        Ok((d1, d2))
    } else {
        period_bounds(r.trim()).ok_or_else(invalid)
    }
}

/// First and last day covered by a single YYYY / YYYY-MM / YYYY-MM-DD.
fn period_bounds(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        // YYYY-MM
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{}-01", p), "%Y-%m-%d").ok()?;
            Some(this_month(first))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p)?;
            Some((d, d))
        }
        _ => None,
    }
}
