use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of an action-log entry.
///
/// The wire values are `CHECK_IN` / `CHECK_OUT`. Anything else is kept as
/// `Other` so newer log kinds pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Action {
    CheckIn,
    CheckOut,
    Other(String),
}

impl Action {
    pub fn as_str(&self) -> &str {
        match self {
            Action::CheckIn => "CHECK_IN",
            Action::CheckOut => "CHECK_OUT",
            Action::Other(s) => s.as_str(),
        }
    }

    /// Convert DB / wire string → enum (never fails)
    pub fn from_db_str(s: &str) -> Self {
        match s {
            "CHECK_IN" => Action::CheckIn,
            "CHECK_OUT" => Action::CheckOut,
            other => Action::Other(other.to_string()),
        }
    }

    pub fn is_check_in(&self) -> bool {
        matches!(self, Action::CheckIn)
    }
}

impl From<String> for Action {
    fn from(s: String) -> Self {
        Action::from_db_str(&s)
    }
}

impl From<Action> for String {
    fn from(a: Action) -> Self {
        a.as_str().to_string()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
