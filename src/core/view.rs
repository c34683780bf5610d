//! Attendance screen state.
//!
//! All mutable state of the attendance screen lives in one struct and only
//! changes through three transitions: `load` (a fresh action-log snapshot
//! arrived), `tick` (the clock advanced) and `submit` (the user pressed
//! check-in / check-out). Reconstruction stays a pure function of the
//! snapshot; rendering only reads from here.

use crate::core::calculator::sessions::{SessionReport, reconstruct};
use crate::models::action::Action;
use crate::models::action_log::ActionLogEntry;
use crate::utils::time::{format_hms, format_timestamp};
use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Clone)]
pub struct AttendanceView {
    pub staff_id: String,
    pub date: NaiveDate,
    pub report: SessionReport,
    pub now: NaiveDateTime,
    /// Generation of the snapshot currently shown (0 = nothing loaded).
    pub generation: u64,
    /// Set by `submit`, cleared by the next accepted `load`.
    pub awaiting_reload: bool,
}

impl AttendanceView {
    pub fn new(staff_id: impl Into<String>, date: NaiveDate, now: NaiveDateTime) -> Self {
        Self {
            staff_id: staff_id.into(),
            date,
            report: SessionReport::default(),
            now,
            generation: 0,
            awaiting_reload: false,
        }
    }

    /// Replace the report with the reconstruction of `entries`.
    ///
    /// Snapshots older than the one already shown are discarded (last write
    /// wins); returns whether the snapshot was accepted.
    pub fn load(&mut self, generation: u64, entries: &[ActionLogEntry]) -> bool {
        if generation < self.generation {
            return false;
        }

        self.report = reconstruct(entries);
        self.generation = generation;
        self.awaiting_reload = false;
        true
    }

    /// Advance the observation time. The report is left untouched.
    pub fn tick(&mut self, now: NaiveDateTime) {
        self.now = now;
    }

    pub fn is_running(&self) -> bool {
        self.report.is_running()
    }

    /// Check-out while a session is running, check-in otherwise.
    pub fn next_action(&self) -> Action {
        if self.is_running() {
            Action::CheckOut
        } else {
            Action::CheckIn
        }
    }

    /// Build the entry for the next action at the current observation time.
    pub fn submit(&mut self, device: Option<String>, created_by: Option<String>) -> ActionLogEntry {
        self.awaiting_reload = true;

        ActionLogEntry::new(
            self.staff_id.clone(),
            self.date,
            self.next_action(),
            format_timestamp(self.now),
        )
        .with_device(device)
        .with_created_by(created_by)
    }

    pub fn elapsed_seconds(&self) -> i64 {
        self.report.elapsed_seconds_at(self.now)
    }

    /// Live clock, `HH:MM:SS`.
    pub fn clock(&self) -> String {
        format_hms(self.elapsed_seconds())
    }
}
