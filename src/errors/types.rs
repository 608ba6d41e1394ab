//! Error type definitions for the jobs API

use thiserror::Error;

/// Top-level application error type
///
/// Carries the discriminant the web layer needs (`BadRequest`, `NotFound`,
/// `Unauthorized`) plus a message. Anything else surfaces as a 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid input: empty update payloads, schema failures, constraint violations
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Resource not found errors
    #[error("Not found: {resource} with id {id}")]
    NotFound { resource: String, id: String },

    /// Missing, invalid or insufficiently privileged credentials
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Database errors that are not a client's fault
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    /// Create a bad request error with a custom message
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a not found error for a specific resource
    pub fn not_found<R: Into<String>, I: Into<String>>(resource: R, id: I) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// Create an unauthorized error
    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether this error is the client's fault
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::BadRequest { .. } | Self::NotFound { .. } | Self::Unauthorized { .. }
        )
    }
}

/// Constraint violations reported by the database are bad input, not server
/// failures. Everything else stays a `Database` error.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_error) = &error {
            if db_error.is_unique_violation() {
                return Self::bad_request(format!("Duplicate record: {}", db_error.message()));
            }
            if db_error.is_foreign_key_violation() {
                return Self::bad_request(format!(
                    "Referenced record does not exist: {}",
                    db_error.message()
                ));
            }
            if db_error.is_check_violation() {
                return Self::bad_request(format!("Invalid value: {}", db_error.message()));
            }
        }
        Self::Database(error)
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> Self {
        Self::unauthorized(format!("Invalid token: {error}"))
    }
}
