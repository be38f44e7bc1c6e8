//! Homework domain types

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Review status of a submitted homework, as reported by the status API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Every status the verdict table knows about
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::Approved,
        HomeworkStatus::Reviewing,
        HomeworkStatus::Rejected,
    ];

    /// Wire representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    /// Human-readable verdict shown to the user
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HomeworkStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HomeworkStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseError::UnknownStatus(s.to_string()))
    }
}

/// Errors raised while reading a single homework entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A required field is absent or empty
    #[error("homework field \"{0}\" is missing or empty")]
    MissingField(&'static str),

    /// The status is not in the verdict table
    #[error("unexpected homework status: {0}")]
    UnknownStatus(String),
}

/// Builds the notification text for one homework entry
///
/// The entry must carry a non-empty `homework_name` and a `status` from the
/// verdict table. Anything else in the entry is ignored.
pub fn parse_status(item: &Value) -> Result<String, ParseError> {
    let name = item
        .get("homework_name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .ok_or(ParseError::MissingField("homework_name"))?;

    let status: HomeworkStatus = match item.get("status") {
        Some(Value::String(raw)) => raw.parse()?,
        Some(Value::Null) | None => return Err(ParseError::MissingField("status")),
        Some(other) => return Err(ParseError::UnknownStatus(other.to_string())),
    };

    Ok(format!(
        "Изменился статус проверки работы \"{}\"{}",
        name,
        status.verdict()
    ))
}
