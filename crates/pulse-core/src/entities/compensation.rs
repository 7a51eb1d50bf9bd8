use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::CalculationMethod;

/// Target annual compensation for one employee within a scenario.
///
/// A target with `is_manual_override` set is never replaced by an automatic
/// recalculation unless the caller forces it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CompensationTarget {
    pub employee_id: String,
    pub scenario_id: String,
    pub target_annual_compensation: f64,
    pub calculation_method: CalculationMethod,
    /// Provenance of the benchmark figure.
    pub benchmark_source: String,
    pub explanation: String,
    pub is_manual_override: bool,
    #[serde(default)]
    pub current_compensation: Option<f64>,
    /// Current compensation divided by the target.
    #[serde(default)]
    pub compa_ratio: Option<f64>,
    /// Confidence of the role match the target was derived from.
    #[serde(default)]
    pub match_confidence: Option<f64>,
}
