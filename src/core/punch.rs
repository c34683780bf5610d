use crate::core::view::AttendanceView;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_action, load_actions};
use crate::errors::AppResult;
use crate::models::action::Action;
use crate::models::action_log::ActionLogEntry;
use crate::ui::messages::warning;
use crate::utils::time::format_timestamp;
use chrono::NaiveDateTime;

/// Who/where a punch is recorded from.
#[derive(Debug, Clone, Default)]
pub struct PunchOrigin {
    pub device: Option<String>,
    pub created_by: Option<String>,
}

/// High-level business logic for `checkin`, `checkout` and `punch`.
pub struct PunchLogic;

impl PunchLogic {
    /// Record an explicit check-in or check-out at `at`.
    ///
    /// The entry is stored even when it does not match the current state
    /// (double check-in, check-out with nothing open): the log is the source
    /// of truth and reconstruction decides what it means.
    pub fn record(
        pool: &mut DbPool,
        staff_id: &str,
        action: Action,
        at: NaiveDateTime,
        origin: &PunchOrigin,
    ) -> AppResult<ActionLogEntry> {
        let date = at.date();
        let existing = load_actions(pool, staff_id, &date)?;
        let mut view = AttendanceView::new(staff_id, date, at);
        view.load(1, &existing);

        match (&action, view.is_running()) {
            (Action::CheckIn, true) => warning(format!(
                "Staff {} already has an open session; it will be kept without a check-out.",
                staff_id
            )),
            (Action::CheckOut, false) => warning(format!(
                "Staff {} has no open session on {}; this check-out will be ignored in sessions.",
                staff_id, date
            )),
            _ => {}
        }

        let entry = ActionLogEntry::new(staff_id, date, action, format_timestamp(at))
            .with_device(origin.device.clone())
            .with_created_by(origin.created_by.clone());

        Self::store(pool, &entry)?;
        Ok(entry)
    }

    /// Record whichever action comes next: check-out if running, else check-in.
    pub fn toggle(
        pool: &mut DbPool,
        staff_id: &str,
        at: NaiveDateTime,
        origin: &PunchOrigin,
    ) -> AppResult<ActionLogEntry> {
        let date = at.date();
        let existing = load_actions(pool, staff_id, &date)?;

        let mut view = AttendanceView::new(staff_id, date, at);
        view.load(1, &existing);
        let entry = view.submit(origin.device.clone(), origin.created_by.clone());

        Self::store(pool, &entry)?;
        Ok(entry)
    }

    fn store(pool: &mut DbPool, entry: &ActionLogEntry) -> AppResult<()> {
        insert_action(&pool.conn, entry, "cli")?;

        let operation = match entry.action {
            Action::CheckIn => "checkin",
            Action::CheckOut => "checkout",
            Action::Other(_) => "action",
        };

        ttlog(
            &pool.conn,
            operation,
            &entry.staff_id,
            &format!("{} at {}", entry.action, entry.time_stamp),
        )
    }
}
