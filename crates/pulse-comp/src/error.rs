//! Compensation target error types.

use thiserror::Error;

/// Request-level errors. Per-employee problems never surface here; those
/// employees are reported in [`crate::TargetBatch::unavailable`].
#[derive(Debug, Error)]
pub enum CompError {
    #[error("target percentile {0} is outside (0, 100)")]
    InvalidPercentile(f64),

    #[error("manual target {0} is not a non-negative amount")]
    InvalidAmount(f64),
}
