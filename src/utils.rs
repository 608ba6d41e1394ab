//! Utility functions for the jobs API
//!
//! - `utils::validation` for request schema helpers (serde adapters, field rules)

pub mod validation;
