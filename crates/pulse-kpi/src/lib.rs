//! # pulse-kpi
//!
//! Workforce KPIs over employee records and dataset metadata.
//!
//! The [`KpiRegistry`] is a static, versioned table of definitions, each
//! paired with a formula. [`KpiEngine`] checks the requested ids up front and
//! evaluates each KPI against a [`Workforce`] view of the valid employees
//! active on the reporting date.

pub mod engine;
pub mod error;
pub mod registry;
pub mod workforce;

pub use engine::{KpiBatch, KpiEngine, RejectedRecord};
pub use error::KpiError;
pub use registry::{Formula, KpiRegistry, KpiSpec, REGISTRY_VERSION};
pub use workforce::{PERIOD_DAYS, Workforce};
