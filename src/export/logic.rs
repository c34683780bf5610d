// src/export/logic.rs

use crate::core::logic::{Core, DayReport};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::model::{SessionExport, sessions_from_reports};
use crate::export::{ExportFormat, notify_export_success};
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the sessions of `staff_id` between `from` and `to`.
    ///
    /// Returns the number of sessions written (0 → no file is created).
    pub fn export(
        pool: &mut DbPool,
        staff_id: &str,
        (from, to): (NaiveDate, NaiveDate),
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let reports: Vec<DayReport> = Core::load_range_reports(pool, staff_id, from, to)?;
        let rows: Vec<SessionExport> = sessions_from_reports(&reports);

        if rows.is_empty() {
            warning(format!(
                "No sessions for staff {} between {} and {}.",
                staff_id, from, to
            ));
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => write_csv(path, &rows)?,
            ExportFormat::Json => write_json(path, &rows)?,
        }

        ttlog(
            &pool.conn,
            "export",
            &path.display().to_string(),
            &format!(
                "Exported {} sessions of staff {} ({} → {}) as {}",
                rows.len(),
                staff_id,
                from,
                to,
                format.as_str()
            ),
        )?;

        notify_export_success(&format.as_str().to_uppercase(), rows.len(), path);
        Ok(rows.len())
    }
}
