// src/export/model.rs

use crate::core::logic::DayReport;
use crate::utils::time::format_timestamp;
use serde::Serialize;

/// Flat row per reconstructed session.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SessionExport {
    pub staff_id: String,
    pub date: String,
    pub start: String,
    pub end: Option<String>,
    pub start_device: Option<String>,
    pub end_device: Option<String>,
    pub start_by: Option<String>,
    pub end_by: Option<String>,
    /// `None` for sessions without a check-out
    pub duration_seconds: Option<i64>,
}

pub(crate) fn sessions_from_reports(reports: &[DayReport]) -> Vec<SessionExport> {
    reports
        .iter()
        .flat_map(|day| {
            day.report.sessions.iter().map(move |s| SessionExport {
                staff_id: day.staff_id.clone(),
                date: day.date.format("%Y-%m-%d").to_string(),
                start: format_timestamp(s.start),
                end: s.end.map(format_timestamp),
                start_device: s.start_device.clone(),
                end_device: s.end_device.clone(),
                start_by: s.start_by.clone(),
                end_by: s.end_by.clone(),
                duration_seconds: s.duration_seconds(),
            })
        })
        .collect()
}
