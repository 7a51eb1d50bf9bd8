use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SeniorityLevel;

/// Canonical role definition from the versioned role taxonomy.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaxonomyEntry {
    pub role_family: String,
    pub standardized_title: String,
    #[serde(default)]
    pub seniority_level: Option<SeniorityLevel>,
    /// Known alternative spellings; matched after normalization.
    #[serde(default)]
    pub aliases: Vec<String>,
}
