//! # pulse-comp
//!
//! Compensation targets per employee.
//!
//! For each employee: resolve the title with `pulse-match`, pick a market
//! benchmark with `pulse-bench`, then read the requested percentile from its
//! bands. A missing band is interpolated from its neighbours; a benchmark
//! without usable bands falls back to the role-family average. Every
//! target records its method and a plain-language explanation.

mod band;
mod calculator;
mod error;
mod request;

pub use band::{BandReading, percentile_label, read_percentile};
pub use calculator::{CompensationTargetCalculator, manual_override};
pub use error::CompError;
pub use request::{TargetBatch, TargetRequest, Unavailable};
