//! Health-score category weights.

use std::collections::BTreeMap;

use pulse_core::enums::KpiCategory;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_weight() -> f64 {
    0.25
}

/// Relative weight of each KPI category in the composite score. Weights need
/// not sum to 1; the aggregator renormalizes over scored categories.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CategoryWeights {
    #[serde(default = "default_weight")]
    pub workforce: f64,
    #[serde(default = "default_weight")]
    pub compensation: f64,
    #[serde(default = "default_weight")]
    pub productivity: f64,
    #[serde(default = "default_weight")]
    pub retention: f64,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            workforce: default_weight(),
            compensation: default_weight(),
            productivity: default_weight(),
            retention: default_weight(),
        }
    }
}

impl CategoryWeights {
    #[must_use]
    pub const fn get(&self, category: KpiCategory) -> f64 {
        match category {
            KpiCategory::Workforce => self.workforce,
            KpiCategory::Compensation => self.compensation,
            KpiCategory::Productivity => self.productivity,
            KpiCategory::Retention => self.retention,
        }
    }

    #[must_use]
    pub fn to_map(&self) -> BTreeMap<KpiCategory, f64> {
        KpiCategory::ALL
            .iter()
            .map(|&category| (category, self.get(category)))
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HealthConfig {
    #[serde(default)]
    pub weights: CategoryWeights,
}

impl HealthConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a negative or non-finite weight.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for category in KpiCategory::ALL {
            let weight = self.weights.get(category);
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: format!("health.weights.{category}"),
                    reason: format!("{weight} is not a non-negative weight"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_are_even() {
        let map = CategoryWeights::default().to_map();
        assert_eq!(map.len(), 4);
        assert!(map.values().all(|w| (w - 0.25).abs() < f64::EPSILON));
    }

    #[test]
    fn negative_weight_is_rejected() {
        let config = HealthConfig {
            weights: CategoryWeights {
                retention: -1.0,
                ..CategoryWeights::default()
            },
        };
        assert!(config.validate().is_err());
    }
}
