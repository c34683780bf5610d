use crate::core::calculator::sessions::{SessionReport, reconstruct};
use crate::db::pool::DbPool;
use crate::db::queries::load_actions_in_range;
use crate::errors::AppResult;
use crate::models::action_log::ActionLogEntry;
use chrono::NaiveDate;
use serde::Serialize;

/// Sessions of one staff member on one date.
#[derive(Debug, Clone, Serialize)]
pub struct DayReport {
    pub staff_id: String,
    pub date: NaiveDate,
    pub report: SessionReport,
}

pub struct Core;

impl Core {
    pub fn build_day_report(staff_id: &str, date: NaiveDate, entries: &[ActionLogEntry]) -> DayReport {
        DayReport {
            staff_id: staff_id.to_string(),
            date,
            report: reconstruct(entries),
        }
    }

    /// One report per date that has entries, oldest first. Each date is
    /// reconstructed on its own: sessions never span two dates.
    pub fn load_range_reports(
        pool: &mut DbPool,
        staff_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<DayReport>> {
        let entries = load_actions_in_range(pool, staff_id, &from, &to)?;

        let mut out = Vec::new();
        for chunk in entries.chunk_by(|a, b| a.date == b.date) {
            // Rows come straight from the DB, the date is always well-formed
            let Some(date) = chunk[0].date_value() else {
                continue;
            };
            out.push(Self::build_day_report(staff_id, date, chunk));
        }

        Ok(out)
    }
}
