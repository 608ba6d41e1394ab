//! Web utility functions

use crate::errors::{AppError, AppResult};

/// Parse an integer id path parameter
///
/// A non-numeric id cannot name any row, so it is reported as `NotFound`
/// rather than as a malformed request.
pub fn extract_id_param(resource: &str, param: &str) -> AppResult<i64> {
    param
        .parse::<i64>()
        .map_err(|_| AppError::not_found(resource, param))
}
