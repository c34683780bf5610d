use super::action::Action;
use crate::utils::time::parse_timestamp;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// One timestamped action recorded for a staff member on a date.
///
/// Field names follow the `getActionLogs` response (`staffId`, `timeStamp`,
/// `createdBy`), so a response body deserializes straight into this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionLogEntry {
    #[serde(deserialize_with = "staff_id_from_text_or_number")]
    pub staff_id: String,
    pub date: String,       // ⇔ action_logs.date (TEXT "YYYY-MM-DD")
    pub action: Action,     // ⇔ action_logs.action ('CHECK_IN' | 'CHECK_OUT' | ...)
    pub time_stamp: String, // ⇔ action_logs.time_stamp (naive wall-clock)
    #[serde(default)]
    pub device: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
}

/// `staffId` arrives as a string or as a bare integer, depending on the
/// backend. Both are kept as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum StaffIdRepr {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

fn staff_id_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StaffIdRepr::deserialize(deserializer)? {
        StaffIdRepr::Text(s) => s,
        StaffIdRepr::Signed(n) => n.to_string(),
        StaffIdRepr::Unsigned(n) => n.to_string(),
    })
}

impl ActionLogEntry {
    pub fn new(
        staff_id: impl Into<String>,
        date: NaiveDate,
        action: Action,
        time_stamp: impl Into<String>,
    ) -> Self {
        Self {
            staff_id: staff_id.into(),
            date: date.format("%Y-%m-%d").to_string(),
            action,
            time_stamp: time_stamp.into(),
            device: None,
            created_by: None,
        }
    }

    pub fn with_device(mut self, device: Option<String>) -> Self {
        self.device = device;
        self
    }

    pub fn with_created_by(mut self, created_by: Option<String>) -> Self {
        self.created_by = created_by;
        self
    }

    /// Parsed timestamp, `None` when the stored string is malformed.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.time_stamp)
    }

    pub fn date_value(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}
