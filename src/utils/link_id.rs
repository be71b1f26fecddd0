//! Link id validation for path parameters.

use crate::error::AppError;
use serde_json::json;

/// Parses a raw path segment as a link id.
///
/// Malformed input is a validation error, distinct from an unknown id.
///
/// # Errors
///
/// Returns [`AppError::Validation`] unless `raw` is a positive integer.
pub fn parse_link_id(raw: &str) -> Result<i64, AppError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::bad_request(
            "Invalid link id",
            json!({ "id": raw, "reason": "must be a positive integer" }),
        )),
    }
}
