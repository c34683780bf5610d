use crate::models::action::Action;
use crate::models::action_log::ActionLogEntry;
use crate::models::session::Session;
use crate::utils::time::seconds_between;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Entry that could not take part in the reconstruction because its
/// timestamp did not parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    pub index: usize,
    pub time_stamp: String,
}

/// Result of one reconstruction over one snapshot of the action log.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    pub sessions: Vec<Session>,
    /// Seconds of closed sessions only.
    pub worked_seconds: i64,
    /// Start of the trailing session when it is still open.
    pub open_since: Option<NaiveDateTime>,
    pub skipped: Vec<SkippedEntry>,
}

impl SessionReport {
    pub fn is_running(&self) -> bool {
        self.open_since.is_some()
    }

    /// Worked time as observed at `now`: closed sessions plus the live part
    /// of the open one.
    pub fn elapsed_seconds_at(&self, now: NaiveDateTime) -> i64 {
        match self.open_since {
            Some(since) => self.worked_seconds + seconds_between(since, now),
            None => self.worked_seconds,
        }
    }
}

/// Rebuild work sessions from an action log.
///
/// Entries are consumed in the order given (callers supply them in
/// chronological order, nothing is sorted here). A check-in while a session
/// is open keeps the old one as an open record; a check-out with nothing
/// open is dropped; other actions are ignored.
pub fn reconstruct(entries: &[ActionLogEntry]) -> SessionReport {
    let mut sessions = Vec::new();
    let mut skipped = Vec::new();
    let mut current: Option<Session> = None;
    let mut total = 0;

    // -----------------------------
    // Single pass over the log
    // -----------------------------
    for (index, entry) in entries.iter().enumerate() {
        if !matches!(entry.action, Action::CheckIn | Action::CheckOut) {
            continue;
        }

        let Some(ts) = entry.timestamp() else {
            skipped.push(SkippedEntry {
                index,
                time_stamp: entry.time_stamp.clone(),
            });
            continue;
        };

        match entry.action {
            Action::CheckIn => {
                // Missed check-out: keep the superseded session without an end
                if let Some(prev) = current.take() {
                    sessions.push(prev);
                }
                current = Some(Session::open(
                    ts,
                    entry.device.clone(),
                    entry.created_by.clone(),
                ));
            }
            Action::CheckOut => {
                // Orphan check-out → ignored
                if let Some(mut open) = current.take() {
                    total += seconds_between(open.start, ts);
                    open.end = Some(ts);
                    open.end_device = entry.device.clone();
                    open.end_by = entry.created_by.clone();
                    sessions.push(open);
                }
            }
            Action::Other(_) => {}
        }
    }

    // -----------------------------
    // Trailing open session
    // -----------------------------
    let open_since = current.as_ref().map(|s| s.start);
    if let Some(open) = current {
        sessions.push(open);
    }

    SessionReport {
        sessions,
        worked_seconds: total,
        open_since,
        skipped,
    }
}
