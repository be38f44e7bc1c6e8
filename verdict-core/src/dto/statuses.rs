//! Status API payload validation

use serde_json::Value;
use thiserror::Error;

/// Key holding the list of homework entries
pub const HOMEWORKS_KEY: &str = "homeworks";

/// Key holding the server-reported cursor for the next query
pub const CURRENT_DATE_KEY: &str = "current_date";

/// The decoded payload does not have the documented shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("malformed API response: not a mapping")]
    NotAMapping,

    #[error("malformed API response: missing homeworks")]
    MissingHomeworks,

    #[error("malformed API response: homeworks not a list")]
    HomeworksNotAList,
}

/// Checks the payload shape and returns its homework entries untouched
///
/// Individual entries are not inspected here; see
/// [`parse_status`](crate::parse_status).
pub fn validate_response(payload: &Value) -> Result<&[Value], ShapeError> {
    let object = payload.as_object().ok_or(ShapeError::NotAMapping)?;

    let homeworks = object
        .get(HOMEWORKS_KEY)
        .ok_or(ShapeError::MissingHomeworks)?;

    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or(ShapeError::HomeworksNotAList)
}

/// Server-reported cursor, if present and an integer
pub fn current_date(payload: &Value) -> Option<i64> {
    payload.get(CURRENT_DATE_KEY).and_then(Value::as_i64)
}
