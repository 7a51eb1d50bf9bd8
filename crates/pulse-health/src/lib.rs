//! # pulse-health
//!
//! Turns KPI values into a single [0, 100] health score.
//!
//! Each KPI with a benchmark range is scored linearly (low 0, median 50,
//! high 100, mirrored for lower-is-better KPIs); KPIs are averaged per
//! category and categories are combined with renormalized weights.
//! [`cost_signal`] adds an anomaly z-score for a historical cost series.

mod aggregate;
mod error;
mod score;
mod signal;

pub use aggregate::{aggregate, aggregate_at};
pub use error::HealthError;
pub use score::score_kpi;
pub use signal::{MIN_SERIES_LEN, cost_signal};
