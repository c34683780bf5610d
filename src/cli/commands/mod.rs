pub mod config;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod punch;
pub mod status;

use crate::config::Config;
use crate::core::punch::PunchOrigin;
use crate::db::initialize::open_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date_arg;
use crate::utils::time::{parse_time, parse_timestamp};
use chrono::{NaiveDate, NaiveDateTime};

/// Open the configured database, running pending migrations.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    open_db(&cfg.database)
}

/// `--date` or today in the configured zone.
pub(crate) fn resolve_date(cfg: &Config, date: Option<&str>) -> AppResult<NaiveDate> {
    match date {
        Some(d) => parse_date_arg(d),
        None => Ok(cfg.zone()?.today()),
    }
}

/// Moment of a punch from `--date` / `--at`.
///
/// - no `--at` → now (on `--date`, if given)
/// - `--at HH:MM[:SS]` → that time on `--date` (default today)
/// - `--at` full timestamp → used as is; `--date` must agree
pub(crate) fn resolve_moment(
    cfg: &Config,
    date: Option<&str>,
    at: Option<&str>,
) -> AppResult<NaiveDateTime> {
    let zone = cfg.zone()?;

    let Some(at) = at else {
        let now = zone.now();
        return match date {
            Some(d) => Ok(parse_date_arg(d)?.and_time(now.time())),
            None => Ok(now),
        };
    };

    if let Some(ts) = parse_timestamp(at) {
        if let Some(d) = date
            && parse_date_arg(d)? != ts.date()
        {
            return Err(AppError::InvalidTimestamp(format!(
                "{} does not fall on --date {}",
                at, d
            )));
        }
        return Ok(ts);
    }

    let time = parse_time(at).ok_or_else(|| AppError::InvalidTime(at.to_string()))?;
    Ok(resolve_date(cfg, date)?.and_time(time))
}

/// Device/actor from the command line, falling back to the configuration.
pub(crate) fn resolve_origin(cfg: &Config, device: Option<&str>, by: Option<&str>) -> PunchOrigin {
    let device = device
        .map(str::to_string)
        .or_else(|| Some(cfg.default_device.clone()))
        .filter(|d| !d.trim().is_empty());

    let created_by = by
        .map(str::to_string)
        .filter(|b| !b.trim().is_empty())
        .or_else(|| cfg.created_by());

    PunchOrigin { device, created_by }
}
