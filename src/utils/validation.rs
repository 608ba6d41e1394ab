//! Request validation helpers
//!
//! Field rules shared by the job request schemas, plus the serde adapter used
//! to tell an explicit `null` apart from a missing field.

use regex::Regex;
use serde::{Deserialize, Deserializer};
use std::sync::OnceLock;

use crate::errors::{AppError, AppResult};

/// Serde helper for fields where `null` and "absent" mean different things
///
/// Use with `#[serde(default, deserialize_with = "deserialize_present")]` on an
/// `Option<Option<T>>`: a missing field stays `None`, `null` becomes
/// `Some(None)`.
pub fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn equity_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(0(\.\d+)?|1(\.0+)?)$").expect("equity pattern is a valid regex")
    })
}

/// Equity is a decimal string between 0 and 1 inclusive, e.g. `"0"`, `"0.25"`, `"1.0"`
pub fn is_valid_equity(value: &str) -> bool {
    equity_pattern().is_match(value)
}

/// Reject empty strings for required text fields (whitespace counts as content)
pub fn require_non_empty(field: &str, value: &str) -> AppResult<()> {
    if value.is_empty() {
        return Err(AppError::bad_request(format!(
            "{field} must not be empty"
        )));
    }
    Ok(())
}

/// Reject negative integers
pub fn require_non_negative(field: &str, value: i64) -> AppResult<()> {
    if value < 0 {
        return Err(AppError::bad_request(format!(
            "{field} must be greater than or equal to 0"
        )));
    }
    Ok(())
}
