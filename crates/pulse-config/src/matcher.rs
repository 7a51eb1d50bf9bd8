//! Role-title matcher tuning.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_fuzzy_threshold() -> f64 {
    0.8
}

const fn default_taxonomy_confidence() -> f64 {
    0.95
}

const fn default_report_margin() -> u32 {
    2
}

const fn default_suggestion_limit() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatcherConfig {
    /// Minimum similarity in [0, 1] for a fuzzy match to be accepted.
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,

    /// Confidence reported for a taxonomy alias hit.
    #[serde(default = "default_taxonomy_confidence")]
    pub taxonomy_confidence: f64,

    /// A learned mapping is ignored once its report count exceeds its
    /// verification count by more than this.
    #[serde(default = "default_report_margin")]
    pub report_margin: u32,

    /// Default number of candidates returned by `suggest`.
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: default_fuzzy_threshold(),
            taxonomy_confidence: default_taxonomy_confidence(),
            report_margin: default_report_margin(),
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

impl MatcherConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a score is outside [0, 1].
    pub fn validate(&self) -> Result<(), ConfigError> {
        unit_interval("matcher.fuzzy_threshold", self.fuzzy_threshold)?;
        unit_interval("matcher.taxonomy_confidence", self.taxonomy_confidence)
    }
}

pub(crate) fn unit_interval(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!("{value} is outside [0, 1]"),
        })
    }
}
