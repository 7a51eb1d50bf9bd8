use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{KpiCategory, KpiUnit, Polarity};

/// Reference range a KPI value is scored against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BenchmarkRange {
    pub low: f64,
    pub median: f64,
    pub high: f64,
}

impl BenchmarkRange {
    #[must_use]
    pub const fn new(low: f64, median: f64, high: f64) -> Self {
        Self { low, median, high }
    }

    /// Anchors must be finite and ordered `low <= median <= high`.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.low.is_finite()
            && self.median.is_finite()
            && self.high.is_finite()
            && self.low <= self.median
            && self.median <= self.high
    }
}

/// Registry metadata for one KPI. Ids are stable and never reused.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct KpiDefinition {
    pub id: String,
    pub name: String,
    pub category: KpiCategory,
    /// Name of the formula that evaluates this KPI.
    pub formula: String,
    pub unit: KpiUnit,
    #[serde(default)]
    pub polarity: Polarity,
    #[serde(default)]
    pub benchmark: Option<BenchmarkRange>,
    pub description: String,
}

/// A computed KPI. `value` is `None` when the formula's denominator was zero
/// or missing, or when the KPI could not be evaluated at all; `error` says
/// why in the latter case.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct KpiValue {
    pub kpi_id: String,
    pub value: Option<f64>,
    pub definition: KpiDefinition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
