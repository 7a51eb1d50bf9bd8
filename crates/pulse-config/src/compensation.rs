//! Compensation target defaults.

use pulse_core::enums::CompensationBasis;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_target_percentile() -> f64 {
    50.0
}

const fn default_prorate_by_fte() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CompensationConfig {
    /// Market percentile targets are pegged to, in (0, 100).
    #[serde(default = "default_target_percentile")]
    pub target_percentile: f64,

    /// Which benchmark bands targets are read from.
    #[serde(default)]
    pub basis: CompensationBasis,

    /// Scale targets by the employee's FTE factor.
    #[serde(default = "default_prorate_by_fte")]
    pub prorate_by_fte: bool,
}

impl Default for CompensationConfig {
    fn default() -> Self {
        Self {
            target_percentile: default_target_percentile(),
            basis: CompensationBasis::default(),
            prorate_by_fte: default_prorate_by_fte(),
        }
    }
}

impl CompensationConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the percentile is outside (0, 100).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_percentile > 0.0 && self.target_percentile < 100.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "compensation.target_percentile".to_string(),
                reason: format!("{} is outside (0, 100)", self.target_percentile),
            })
        }
    }
}
