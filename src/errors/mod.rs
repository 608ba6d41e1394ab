//! Centralized error handling for the jobs API
//!
//! Every layer returns [`AppError`]. The model layer raises typed errors
//! (`BadRequest`, `NotFound`) and the web layer translates them into HTTP
//! status codes at the boundary only.
//!
//! # Usage
//!
//! ```rust
//! use jobs_api::errors::{AppError, AppResult};
//!
//! fn example_function(found: bool) -> AppResult<String> {
//!     if !found {
//!         return Err(AppError::not_found("job", "42"));
//!     }
//!     Ok("success".to_string())
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;
