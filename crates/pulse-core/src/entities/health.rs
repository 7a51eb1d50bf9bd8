use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Grade, KpiCategory};

/// How the latest point of a cost/compensation series compares to its history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CostSignal {
    pub latest: f64,
    /// Mean of the points preceding `latest`.
    pub baseline_mean: f64,
    /// Population standard deviation of the points preceding `latest`.
    pub baseline_std_dev: f64,
    pub z_score: f64,
    /// Change against the previous point, in percent; `None` when it was 0.
    pub change_pct: Option<f64>,
}

/// Composite organizational health at one point in time.
///
/// Created fresh on every aggregation; persisting it is the caller's job.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct HealthScoreSnapshot {
    /// In [0, 100].
    pub composite_score: f64,
    pub grade: Grade,
    pub category_scores: BTreeMap<KpiCategory, f64>,
    /// Weights actually applied after excluding unscored categories; sum to 1.
    pub effective_weights: BTreeMap<KpiCategory, f64>,
    pub kpi_scores: BTreeMap<String, f64>,
    /// `composite_score` minus the previous snapshot's, when one was given.
    pub trend: Option<f64>,
    #[serde(default)]
    pub cost_signal: Option<CostSignal>,
    pub calculated_at: DateTime<Utc>,
}
