use crate::utils::time::seconds_between;
use chrono::NaiveDateTime;
use serde::Serialize;

/// A reconstructed interval of work, opened by a check-in and optionally
/// closed by the matching check-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub start_device: Option<String>,
    pub end_device: Option<String>,
    pub start_by: Option<String>,
    pub end_by: Option<String>,
}

impl Session {
    pub fn open(start: NaiveDateTime, device: Option<String>, by: Option<String>) -> Self {
        Self {
            start,
            end: None,
            start_device: device,
            end_device: None,
            start_by: by,
            end_by: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Non-negative length of a closed session; `None` while still open.
    pub fn duration_seconds(&self) -> Option<i64> {
        self.end.map(|end| seconds_between(self.start, end))
    }
}
