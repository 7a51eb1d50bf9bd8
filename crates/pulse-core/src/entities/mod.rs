//! Entity structs for the Pulse workforce data model.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so the
//! surrounding application can persist them or return them over HTTP without
//! the engines knowing about either.

mod benchmark;
mod compensation;
mod context;
mod dataset;
mod employee;
mod health;
mod kpi;
mod mapping;
mod taxonomy;

pub use benchmark::{BenchmarkRow, PercentileBands, STANDARD_PERCENTILES};
pub use compensation::CompensationTarget;
pub use context::OrgContext;
pub use dataset::DatasetMetadata;
pub use employee::EmployeeRecord;
pub use health::{CostSignal, HealthScoreSnapshot};
pub use kpi::{BenchmarkRange, KpiDefinition, KpiValue};
pub use mapping::{MappingKey, RoleMappingEntry, RoleMatch};
pub use taxonomy::TaxonomyEntry;
