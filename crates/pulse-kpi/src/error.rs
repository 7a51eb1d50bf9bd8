//! KPI engine error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KpiError {
    /// The id is not in the registry.
    #[error("unknown KPI id: {0}")]
    UnknownKpi(String),

    /// The KPI is undefined over an empty active workforce.
    #[error("KPI {kpi_id} needs at least one active employee")]
    EmptyWorkforce { kpi_id: String },
}
