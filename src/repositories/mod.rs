//! Repository pattern implementation for data access
//!
//! Separates the HTTP layer from SQL: handlers call [`Repository`] methods,
//! repositories build and run parameterized statements.
//!
//! # Usage
//!
//! ```rust,ignore
//! use jobs_api::repositories::{JobRepository, Repository};
//!
//! async fn example(repo: JobRepository) {
//!     let job = repo.get(1).await?;
//!     // ... use job
//! }
//! ```

pub mod job;
pub mod traits;

pub use job::{DynJobRepository, JobRepository};
pub use traits::*;
