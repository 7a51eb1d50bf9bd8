//! Learned mapping library storage.
//!
//! The matcher only talks to the library through [`MappingStore`]. Every
//! write is a single atomic operation on one normalized title, so concurrent
//! writers converge: fields are last-writer-wins and counters increment
//! independently.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use pulse_core::entities::{MappingKey, OrgContext, RoleMappingEntry};

use crate::error::MatchError;

/// What an [`MappingStore::upsert`] did to the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No entry existed for the key.
    Inserted,
    /// An entry with the same standardized title existed; its counters were
    /// merged and its fields refreshed.
    Refreshed,
    /// An entry with a different standardized title was overwritten.
    Replaced,
}

/// Read/write interface to the learned mapping library.
pub trait MappingStore: Send + Sync {
    /// Entry stored under exactly this key.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Store`] if the backing store fails.
    fn get(&self, key: &MappingKey) -> Result<Option<RoleMappingEntry>, MatchError>;

    /// Every entry for a normalized title, across all contexts.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Store`] if the backing store fails.
    fn entries_for_title(&self, normalized_title: &str)
    -> Result<Vec<RoleMappingEntry>, MatchError>;

    /// Insert `entry`, or merge it into the entry already stored under its key.
    ///
    /// Merging with an entry of the same standardized title adds the incoming
    /// counters to the stored ones; a different standardized title replaces
    /// the stored entry outright.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Store`] if the backing store fails.
    fn upsert(&self, entry: RoleMappingEntry) -> Result<UpsertOutcome, MatchError>;

    /// Bump the verification count. Returns `false` (and creates nothing)
    /// when no entry exists for the key.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Store`] if the backing store fails.
    fn increment_verified(&self, key: &MappingKey, at: DateTime<Utc>) -> Result<bool, MatchError>;

    /// Bump the report count. Returns `false` (and creates nothing) when no
    /// entry exists for the key.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Store`] if the backing store fails.
    fn increment_reported(&self, key: &MappingKey, at: DateTime<Utc>) -> Result<bool, MatchError>;

    /// All entries, ordered by key.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Store`] if the backing store fails.
    fn snapshot(&self) -> Result<Vec<RoleMappingEntry>, MatchError>;
}

/// In-process [`MappingStore`] sharded by normalized title.
#[derive(Debug, Default)]
pub struct InMemoryMappingStore {
    entries: DashMap<String, HashMap<OrgContext, RoleMappingEntry>>,
}

impl InMemoryMappingStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store from previously persisted entries.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = RoleMappingEntry>) -> Self {
        let store = Self::new();
        for entry in entries {
            let entry = canonical(entry);
            let key = entry.key();
            store
                .entries
                .entry(key.normalized_title)
                .or_default()
                .insert(key.context, entry);
        }
        store
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.iter().map(|shard| shard.value().len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn bump(
        &self,
        key: &MappingKey,
        at: DateTime<Utc>,
        counter: impl FnOnce(&mut RoleMappingEntry),
    ) -> bool {
        let Some(mut by_context) = self.entries.get_mut(&key.normalized_title) else {
            return false;
        };
        let Some(entry) = by_context.get_mut(&key.context) else {
            return false;
        };
        counter(entry);
        entry.updated_at = at;
        true
    }
}

impl MappingStore for InMemoryMappingStore {
    fn get(&self, key: &MappingKey) -> Result<Option<RoleMappingEntry>, MatchError> {
        Ok(self
            .entries
            .get(&key.normalized_title)
            .and_then(|by_context| by_context.get(&key.context).cloned()))
    }

    fn entries_for_title(
        &self,
        normalized_title: &str,
    ) -> Result<Vec<RoleMappingEntry>, MatchError> {
        let mut found: Vec<RoleMappingEntry> = self
            .entries
            .get(normalized_title)
            .map(|by_context| by_context.values().cloned().collect())
            .unwrap_or_default();
        found.sort_by(|a, b| a.context.cmp(&b.context));
        Ok(found)
    }

    fn upsert(&self, entry: RoleMappingEntry) -> Result<UpsertOutcome, MatchError> {
        let entry = canonical(entry);
        let key = entry.key();
        let mut by_context = self.entries.entry(key.normalized_title).or_default();

        let outcome = match by_context.get_mut(&key.context) {
            None => {
                by_context.insert(key.context, entry);
                UpsertOutcome::Inserted
            }
            Some(existing) if existing.standardized_title == entry.standardized_title => {
                existing.verified_count =
                    existing.verified_count.saturating_add(entry.verified_count);
                existing.reported_count =
                    existing.reported_count.saturating_add(entry.reported_count);
                existing.seniority_level = entry.seniority_level.or(existing.seniority_level);
                existing.role_family = entry.role_family;
                existing.updated_at = existing.updated_at.max(entry.updated_at);
                UpsertOutcome::Refreshed
            }
            Some(existing) => {
                *existing = entry;
                UpsertOutcome::Replaced
            }
        };
        Ok(outcome)
    }

    fn increment_verified(&self, key: &MappingKey, at: DateTime<Utc>) -> Result<bool, MatchError> {
        Ok(self.bump(key, at, |e| {
            e.verified_count = e.verified_count.saturating_add(1);
        }))
    }

    fn increment_reported(&self, key: &MappingKey, at: DateTime<Utc>) -> Result<bool, MatchError> {
        Ok(self.bump(key, at, |e| {
            e.reported_count = e.reported_count.saturating_add(1);
        }))
    }

    fn snapshot(&self) -> Result<Vec<RoleMappingEntry>, MatchError> {
        let mut all: Vec<RoleMappingEntry> = self
            .entries
            .iter()
            .flat_map(|shard| shard.value().values().cloned().collect::<Vec<_>>())
            .collect();
        all.sort_by_key(RoleMappingEntry::key);
        Ok(all)
    }
}

/// Stored entries carry the canonical form of their context.
fn canonical(mut entry: RoleMappingEntry) -> RoleMappingEntry {
    entry.context = entry.context.normalized();
    entry
}
