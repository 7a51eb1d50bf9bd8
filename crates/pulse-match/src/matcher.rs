//! Title resolution pipeline: learned library, taxonomy aliases, fuzzy match.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use pulse_config::MatcherConfig;
use pulse_core::entities::{MappingKey, OrgContext, RoleMappingEntry, RoleMatch, TaxonomyEntry};
use pulse_core::enums::{MatchType, SeniorityLevel};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::MatchError;
use crate::normalize::{NormalizedTitle, normalize};
use crate::similarity::similarity;
use crate::store::{InMemoryMappingStore, MappingStore, UpsertOutcome};
use crate::taxonomy::Taxonomy;

/// Source note for results resolved while the mapping library could not be read.
pub const LIBRARY_UNAVAILABLE: &str = "library unavailable";

/// A confirmed mapping to be learned by the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMapping {
    /// Free-text title as users write it, e.g. `"Sr Eng"`.
    pub title: String,
    pub standardized_title: String,
    pub role_family: String,
    #[serde(default)]
    pub seniority_level: Option<SeniorityLevel>,
    #[serde(default)]
    pub context: OrgContext,
}

/// A ranked fuzzy candidate for manual mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub standardized_title: String,
    pub role_family: String,
    pub seniority_level: Option<SeniorityLevel>,
    pub score: f64,
}

/// Resolves free-text job titles to canonical roles.
#[derive(Debug)]
pub struct RoleMatcher<S = InMemoryMappingStore> {
    taxonomy: Taxonomy,
    store: S,
    config: MatcherConfig,
}

impl RoleMatcher<InMemoryMappingStore> {
    /// Built-in taxonomy with an empty in-memory library.
    #[must_use]
    pub fn new(config: MatcherConfig) -> Self {
        Self::with_store(Taxonomy::builtin(), InMemoryMappingStore::new(), config)
    }
}

impl<S: MappingStore> RoleMatcher<S> {
    #[must_use]
    pub const fn with_store(taxonomy: Taxonomy, store: S, config: MatcherConfig) -> Self {
        Self {
            taxonomy,
            store,
            config,
        }
    }

    #[must_use]
    pub const fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn config(&self) -> &MatcherConfig {
        &self.config
    }

    // -------------------------------------------------------------------
    // Matching
    // -------------------------------------------------------------------

    /// Resolve one title.
    ///
    /// Stages run in order and stop at the first hit: learned library
    /// (`exact`), taxonomy alias (`taxonomy`), fuzzy title similarity
    /// (`fuzzy`). When nothing clears, the result is `none` with the input
    /// title as its standardized title.
    #[must_use]
    pub fn match_title(&self, title: &str, context: Option<&OrgContext>) -> RoleMatch {
        let normalized = normalize(title);
        let resolved = self.resolve(&normalized, context);
        finish(resolved, title)
    }

    /// Resolve many titles, once per distinct title.
    ///
    /// The result holds every non-blank input title exactly once, in first
    /// occurrence order. Distinct normalized titles are resolved in parallel.
    #[must_use]
    pub fn match_batch<T>(&self, titles: &[T], context: Option<&OrgContext>) -> IndexMap<String, RoleMatch>
    where
        T: AsRef<str> + Sync,
    {
        let mut normalized: IndexMap<&str, NormalizedTitle> = IndexMap::new();
        for title in titles {
            let title = title.as_ref();
            if normalized.contains_key(title) {
                continue;
            }
            let n = normalize(title);
            if n.is_empty() {
                tracing::debug!(title, "matcher: skipping blank title");
                continue;
            }
            normalized.insert(title, n);
        }

        let mut seen = HashSet::new();
        let distinct: Vec<&NormalizedTitle> = normalized
            .values()
            .filter(|n| seen.insert(n.key.as_str()))
            .collect();

        let resolved: HashMap<&str, RoleMatch> = distinct
            .par_iter()
            .map(|n| (n.key.as_str(), self.resolve(n, context)))
            .collect();

        let results: IndexMap<String, RoleMatch> = normalized
            .iter()
            .filter_map(|(title, n)| {
                resolved
                    .get(n.key.as_str())
                    .map(|m| ((*title).to_string(), finish(m.clone(), title)))
            })
            .collect();

        tracing::info!(
            titles = titles.len(),
            distinct = distinct.len(),
            resolved = results.values().filter(|m| m.is_resolved()).count(),
            "matcher: batch matched"
        );
        results
    }

    /// Top `limit` taxonomy titles by similarity, best first, unfiltered by
    /// the fuzzy threshold.
    #[must_use]
    pub fn suggest(&self, title: &str, limit: usize) -> Vec<Suggestion> {
        let normalized = normalize(title);
        if normalized.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(f64, &TaxonomyEntry)> = self
            .taxonomy
            .titles()
            .map(|(key, entry)| (similarity(&normalized.key, key), entry))
            .collect();
        scored.sort_by(|(sa, ea), (sb, eb)| {
            sb.total_cmp(sa)
                .then_with(|| ea.standardized_title.cmp(&eb.standardized_title))
        });

        scored
            .into_iter()
            .take(limit)
            .map(|(score, entry)| Suggestion {
                standardized_title: entry.standardized_title.clone(),
                role_family: entry.role_family.clone(),
                seniority_level: entry.seniority_level,
                score,
            })
            .collect()
    }

    fn resolve(&self, normalized: &NormalizedTitle, context: Option<&OrgContext>) -> RoleMatch {
        if normalized.is_empty() {
            return unmatched(normalized);
        }
        let library_down = match self.match_library(normalized, context) {
            Ok(Some(hit)) => return hit,
            Ok(None) => false,
            Err(error) => {
                tracing::warn!(title = %normalized.key, %error, "matcher: library lookup failed");
                true
            }
        };
        let mut resolved = self
            .match_taxonomy(normalized)
            .or_else(|| self.match_fuzzy(normalized))
            .unwrap_or_else(|| {
                tracing::debug!(title = %normalized.key, "matcher: no match");
                unmatched(normalized)
            });
        if library_down {
            resolved.source = Some(resolved.source.take().map_or_else(
                || LIBRARY_UNAVAILABLE.to_string(),
                |source| format!("{source} ({LIBRARY_UNAVAILABLE})"),
            ));
        }
        resolved
    }

    fn match_library(
        &self,
        normalized: &NormalizedTitle,
        context: Option<&OrgContext>,
    ) -> Result<Option<RoleMatch>, MatchError> {
        let entries = self.store.entries_for_title(&normalized.key)?;
        let query = context.map(OrgContext::normalized).unwrap_or_default();
        let margin = self.config.report_margin;

        let best = entries
            .into_iter()
            .filter(|entry| {
                if entry.is_discredited(margin) {
                    tracing::warn!(
                        title = %entry.normalized_title,
                        standardized = %entry.standardized_title,
                        verified = entry.verified_count,
                        reported = entry.reported_count,
                        "matcher: excluding discredited mapping"
                    );
                    return false;
                }
                !entry.context.conflicts_with(&query)
            })
            .min_by(|a, b| library_order(a, b, &query));
        let Some(best) = best else {
            return Ok(None);
        };

        tracing::debug!(
            title = %normalized.key,
            standardized = %best.standardized_title,
            verified = best.verified_count,
            "matcher: library hit"
        );
        Ok(Some(RoleMatch {
            input_title: String::new(),
            normalized_title: normalized.key.clone(),
            seniority_level: best.seniority_level.or_else(|| hint_level(normalized)),
            role_family: Some(best.role_family),
            confidence: 1.0,
            match_type: MatchType::Exact,
            source: Some(format!("library (verified {})", best.verified_count)),
            standardized_title: best.standardized_title,
        }))
    }

    fn match_taxonomy(&self, normalized: &NormalizedTitle) -> Option<RoleMatch> {
        // The decorated key first, then the bare title with the hint as seniority.
        let (entry, seniority) = if let Some(entry) = self.taxonomy.lookup(&normalized.key) {
            (entry, entry.seniority_level.or_else(|| hint_level(normalized)))
        } else if normalized.hint.is_some() {
            let entry = self.taxonomy.lookup(&normalized.base)?;
            (entry, hint_level(normalized).or(entry.seniority_level))
        } else {
            return None;
        };

        tracing::debug!(
            title = %normalized.key,
            standardized = %entry.standardized_title,
            "matcher: taxonomy hit"
        );
        Some(RoleMatch {
            input_title: String::new(),
            normalized_title: normalized.key.clone(),
            standardized_title: entry.standardized_title.clone(),
            seniority_level: seniority,
            role_family: Some(entry.role_family.clone()),
            confidence: self.config.taxonomy_confidence,
            match_type: MatchType::Taxonomy,
            source: Some(format!("taxonomy {}", self.taxonomy.version())),
        })
    }

    fn match_fuzzy(&self, normalized: &NormalizedTitle) -> Option<RoleMatch> {
        // A decorated title is also scored by its bare base; the hint still
        // supplies the seniority.
        let bare = normalized.hint.map(|_| normalized.base.as_str());
        let mut best: Option<(f64, &TaxonomyEntry)> = None;
        for (key, entry) in self.taxonomy.titles() {
            let decorated = similarity(&normalized.key, key);
            let score = bare.map_or(decorated, |base| decorated.max(similarity(base, key)));
            if best.is_none_or(|(top, _)| score > top) {
                best = Some((score, entry));
            }
        }
        let (score, entry) = best?;
        if score < self.config.fuzzy_threshold {
            tracing::debug!(
                title = %normalized.key,
                closest = %entry.standardized_title,
                score,
                "matcher: fuzzy candidate below threshold"
            );
            return None;
        }

        tracing::debug!(
            title = %normalized.key,
            standardized = %entry.standardized_title,
            score,
            "matcher: fuzzy hit"
        );
        Some(RoleMatch {
            input_title: String::new(),
            normalized_title: normalized.key.clone(),
            standardized_title: entry.standardized_title.clone(),
            seniority_level: hint_level(normalized).or(entry.seniority_level),
            role_family: Some(entry.role_family.clone()),
            confidence: score,
            match_type: MatchType::Fuzzy,
            source: Some(format!("taxonomy {} (fuzzy)", self.taxonomy.version())),
        })
    }

    // -------------------------------------------------------------------
    // Learning
    // -------------------------------------------------------------------

    /// Learn a confirmed mapping. A new entry starts with one verification;
    /// re-saving the same mapping counts as another verification.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::EmptyTitle`] or [`MatchError::IncompleteMapping`]
    /// for unusable input, or a store error.
    pub fn save_to_library(&self, mapping: NewMapping) -> Result<UpsertOutcome, MatchError> {
        self.save_to_library_at(mapping, Utc::now())
    }

    /// [`Self::save_to_library`] with an explicit timestamp.
    ///
    /// # Errors
    ///
    /// See [`Self::save_to_library`].
    pub fn save_to_library_at(
        &self,
        mapping: NewMapping,
        at: DateTime<Utc>,
    ) -> Result<UpsertOutcome, MatchError> {
        let normalized = normalize(&mapping.title);
        if normalized.is_empty() {
            return Err(MatchError::EmptyTitle(mapping.title));
        }
        let standardized_title = mapping.standardized_title.trim();
        if standardized_title.is_empty() {
            return Err(MatchError::IncompleteMapping {
                title: mapping.title,
                field: "standardized_title",
            });
        }
        let role_family = mapping.role_family.trim();
        if role_family.is_empty() {
            return Err(MatchError::IncompleteMapping {
                title: mapping.title,
                field: "role_family",
            });
        }

        let entry = RoleMappingEntry {
            seniority_level: mapping.seniority_level.or_else(|| hint_level(&normalized)),
            normalized_title: normalized.key,
            standardized_title: standardized_title.to_string(),
            role_family: role_family.to_string(),
            context: mapping.context.normalized(),
            verified_count: 1,
            reported_count: 0,
            updated_at: at,
        };
        let key = entry.key();
        let outcome = self.store.upsert(entry)?;
        tracing::info!(
            title = %key.normalized_title,
            standardized = standardized_title,
            ?outcome,
            "matcher: mapping saved"
        );
        Ok(outcome)
    }

    /// Confirm an existing mapping. Returns `false` when there is none.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::EmptyTitle`] or a store error.
    pub fn verify_mapping(&self, title: &str, context: Option<&OrgContext>) -> Result<bool, MatchError> {
        let key = library_key(title, context)?;
        let found = self.store.increment_verified(&key, Utc::now())?;
        tracing::info!(title = %key.normalized_title, found, "matcher: mapping verified");
        Ok(found)
    }

    /// Flag an existing mapping as wrong. Returns `false` when there is none.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::EmptyTitle`] or a store error.
    pub fn report_mapping(&self, title: &str, context: Option<&OrgContext>) -> Result<bool, MatchError> {
        let key = library_key(title, context)?;
        let found = self.store.increment_reported(&key, Utc::now())?;
        tracing::info!(title = %key.normalized_title, found, "matcher: mapping reported");
        Ok(found)
    }
}

fn library_key(title: &str, context: Option<&OrgContext>) -> Result<MappingKey, MatchError> {
    let normalized = normalize(title);
    if normalized.is_empty() {
        return Err(MatchError::EmptyTitle(title.to_string()));
    }
    Ok(MappingKey::new(
        normalized.key,
        context.unwrap_or(&OrgContext::default()),
    ))
}

/// Most verified, then most recent, undisputed before disputed, closest
/// context, then alphabetical.
fn library_order(a: &RoleMappingEntry, b: &RoleMappingEntry, query: &OrgContext) -> Ordering {
    b.verified_count
        .cmp(&a.verified_count)
        .then_with(|| b.updated_at.cmp(&a.updated_at))
        .then_with(|| a.is_disputed().cmp(&b.is_disputed()))
        .then_with(|| b.context.affinity(query).cmp(&a.context.affinity(query)))
        .then_with(|| a.standardized_title.cmp(&b.standardized_title))
        .then_with(|| a.context.cmp(&b.context))
}

fn hint_level(normalized: &NormalizedTitle) -> Option<SeniorityLevel> {
    normalized.hint.map(|hint| hint.level())
}

fn unmatched(normalized: &NormalizedTitle) -> RoleMatch {
    RoleMatch {
        input_title: String::new(),
        normalized_title: normalized.key.clone(),
        standardized_title: String::new(),
        seniority_level: hint_level(normalized),
        role_family: None,
        confidence: 0.0,
        match_type: MatchType::None,
        source: None,
    }
}

/// Attach the caller's title; an unmatched title stands in as its own
/// standardized title.
fn finish(mut resolved: RoleMatch, title: &str) -> RoleMatch {
    resolved.input_title = title.to_string();
    if resolved.match_type == MatchType::None {
        resolved.standardized_title = title.to_string();
    }
    resolved
}
