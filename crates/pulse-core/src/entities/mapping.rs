use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::OrgContext;
use crate::enums::{MatchType, SeniorityLevel};

/// Store key for a learned mapping: normalized title plus optional context.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub struct MappingKey {
    pub normalized_title: String,
    #[serde(default)]
    pub context: OrgContext,
}

impl MappingKey {
    /// Build a key; the context is canonicalized so lookups are
    /// case-insensitive.
    #[must_use]
    pub fn new(normalized_title: impl Into<String>, context: &OrgContext) -> Self {
        Self {
            normalized_title: normalized_title.into(),
            context: context.normalized(),
        }
    }
}

/// A learned title → canonical role mapping.
///
/// Only the matcher's learning operations create or mutate these.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RoleMappingEntry {
    pub normalized_title: String,
    pub standardized_title: String,
    #[serde(default)]
    pub seniority_level: Option<SeniorityLevel>,
    pub role_family: String,
    #[serde(default)]
    pub context: OrgContext,
    pub verified_count: u32,
    pub reported_count: u32,
    pub updated_at: DateTime<Utc>,
}

impl RoleMappingEntry {
    #[must_use]
    pub fn key(&self) -> MappingKey {
        MappingKey::new(self.normalized_title.clone(), &self.context)
    }

    /// Reports outnumber verifications by more than `margin`.
    #[must_use]
    pub const fn is_discredited(&self, margin: u32) -> bool {
        self.reported_count > self.verified_count.saturating_add(margin)
    }

    /// Reports outnumber verifications at all.
    #[must_use]
    pub const fn is_disputed(&self) -> bool {
        self.reported_count > self.verified_count
    }
}

/// Result of resolving one free-text title.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RoleMatch {
    /// Title exactly as supplied.
    pub input_title: String,
    pub normalized_title: String,
    /// Canonical title; the input title itself when `match_type == none`.
    pub standardized_title: String,
    pub seniority_level: Option<SeniorityLevel>,
    pub role_family: Option<String>,
    /// In [0, 1].
    pub confidence: f64,
    pub match_type: MatchType,
    /// Where the match came from (library key, taxonomy version, ...).
    pub source: Option<String>,
}

impl RoleMatch {
    /// Whether the match identified a canonical role usable for benchmarking.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.match_type != MatchType::None && self.role_family.is_some()
    }
}
