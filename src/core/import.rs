//! Import of action logs produced elsewhere (the `getActionLogs` query
//! response, or a CSV dump of it).

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_actions;
use crate::errors::{AppError, AppResult};
use crate::models::action::Action;
use crate::models::action_log::ActionLogEntry;
use crate::ui::messages::warning;
use clap::ValueEnum;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ImportFormat {
    Json,
    Csv,
}

impl ImportFormat {
    /// Guess from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Some(ImportFormat::Json),
            Some("csv") => Some(ImportFormat::Csv),
            _ => None,
        }
    }
}

/// Parse a JSON document: a bare array of entries or a GraphQL envelope
/// `{"data": {"getActionLogs": [...]}}`.
pub fn parse_json(text: &str) -> AppResult<Vec<ActionLogEntry>> {
    let mut value: Value = serde_json::from_str(text)?;

    let list = if value.pointer("/data/getActionLogs").is_some() {
        value["data"]["getActionLogs"].take()
    } else {
        value
    };

    if !list.is_array() {
        return Err(AppError::Import(
            "expected an array of action logs or {\"data\":{\"getActionLogs\":[...]}}".to_string(),
        ));
    }

    Ok(serde_json::from_value(list)?)
}

/// One CSV record. Every cell is read as text, so ids like `007` keep
/// their leading zeros.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    staff_id: String,
    date: String,
    action: Action,
    time_stamp: String,
    #[serde(default)]
    device: Option<String>,
    #[serde(default)]
    created_by: Option<String>,
}

impl From<CsvRow> for ActionLogEntry {
    fn from(row: CsvRow) -> Self {
        ActionLogEntry {
            staff_id: row.staff_id,
            date: row.date,
            action: row.action,
            time_stamp: row.time_stamp,
            device: row.device.filter(|d| !d.is_empty()),
            created_by: row.created_by.filter(|c| !c.is_empty()),
        }
    }
}

/// Parse CSV with header `staffId,date,action,timeStamp,device,createdBy`.
/// Empty `device` / `createdBy` cells become absent.
pub fn parse_csv<R: Read>(reader: R) -> AppResult<Vec<ActionLogEntry>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut out = Vec::new();
    for rec in rdr.deserialize::<CsvRow>() {
        out.push(rec?.into());
    }
    Ok(out)
}

pub fn read_file(path: &Path, format: Option<ImportFormat>) -> AppResult<Vec<ActionLogEntry>> {
    let format = format.or_else(|| ImportFormat::from_path(path)).ok_or_else(|| {
        AppError::Import(format!(
            "cannot infer format of '{}', use --format json|csv",
            path.display()
        ))
    })?;

    match format {
        ImportFormat::Json => parse_json(&fs::read_to_string(path)?),
        ImportFormat::Csv => parse_csv(fs::File::open(path)?),
    }
}

pub struct ImportLogic;

impl ImportLogic {
    /// Read `path` and store every entry it contains. Returns the count.
    pub fn import(pool: &mut DbPool, path: &Path, format: Option<ImportFormat>) -> AppResult<usize> {
        let entries = read_file(path, format)?;

        for e in &entries {
            if e.date_value().is_none() {
                return Err(AppError::InvalidDate(e.date.clone()));
            }
            if e.timestamp().is_none() {
                warning(format!(
                    "Malformed timestamp '{}' for staff {} on {}: stored, but skipped in sessions.",
                    e.time_stamp, e.staff_id, e.date
                ));
            }
        }

        let n = insert_actions(pool, &entries, "import")?;

        ttlog(
            &pool.conn,
            "import",
            &path.display().to_string(),
            &format!("Imported {} action log entries", n),
        )?;

        Ok(n)
    }
}
