//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input, call at most two adapters, delegate to the
//! repositories in `ecosort_db`, and map failures via [`AppError`].
//! Request bodies use `Option` fields so a missing field is a 400
//! validation error, not a deserialization rejection.

use ecosort_core::error::CoreError;

use crate::error::AppError;

pub mod auth;
pub mod company;
pub mod leaderboard;
pub mod profile;
pub mod quiz;
pub mod schedule;
pub mod waste;

/// Unwrap a required body field, or fail validation naming it.
pub(crate) fn require<T>(value: Option<T>, field: &'static str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::Core(CoreError::Validation(format!("{field} is required"))))
}

/// Unwrap a required text field, treating blank strings as missing.
pub(crate) fn require_text(value: Option<String>, field: &'static str) -> Result<String, AppError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(AppError::Core(CoreError::Validation(format!(
            "{field} is required"
        )))),
    }
}
