//! Cross-cutting error types for Pulse.
//!
//! Component-specific errors (e.g., `KpiError`, `MatchError`) are defined in
//! their respective crates and wrap [`CoreError`] where a record fails
//! validation.

use thiserror::Error;

/// Errors that can be raised by any Pulse crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Caller-supplied data failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Not enough data to compute a result without fabricating one.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
