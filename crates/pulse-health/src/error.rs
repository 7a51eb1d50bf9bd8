//! Health aggregation error types.

use pulse_core::enums::KpiCategory;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HealthError {
    /// No category had a scorable KPI with a positive weight.
    #[error("no KPI category could be scored")]
    NoScorableCategories,

    #[error("weight for {category} must be finite and non-negative, got {weight}")]
    InvalidWeight { category: KpiCategory, weight: f64 },
}
