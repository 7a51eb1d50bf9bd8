//! End-to-end matcher behaviour over the public API.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use pulse_config::MatcherConfig;
use pulse_core::entities::{MappingKey, OrgContext, RoleMappingEntry};
use pulse_core::enums::MatchType;
use chrono::{DateTime, Utc};
use pulse_match::{
    InMemoryMappingStore, LIBRARY_UNAVAILABLE, MappingStore, MatchError, NewMapping, RoleMatcher,
    Taxonomy, UpsertOutcome,
};

fn confirmed(title: &str, standardized: &str) -> NewMapping {
    NewMapping {
        title: title.into(),
        standardized_title: standardized.into(),
        role_family: "Engineering".into(),
        seniority_level: None,
        context: OrgContext::default(),
    }
}

#[test]
fn matching_is_deterministic() {
    let matcher = RoleMatcher::new(MatcherConfig::default());
    for title in ["Sr. Backend Engineer", "VP, Sales", "Chief Bottle Washer", "SRE"] {
        assert_eq!(matcher.match_title(title, None), matcher.match_title(title, None));
    }
}

#[test]
fn batch_deduplicates_and_skips_blank_titles() {
    let matcher = RoleMatcher::new(MatcherConfig::default());
    let results = matcher.match_batch(&["CEO", "ceo", "", "CEO", "   "], None);

    let keys: Vec<&str> = results.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["CEO", "ceo"]);
    assert_eq!(results["CEO"].input_title, "CEO");
    assert_eq!(results["ceo"].input_title, "ceo");
    assert_eq!(results["CEO"].standardized_title, "Chief Executive Officer");
}

#[test]
fn batch_agrees_with_single_matches() {
    let matcher = RoleMatcher::new(MatcherConfig::default());
    let titles = vec![
        "Software Engineer II".to_string(),
        "Data Scientst".to_string(),
        "Head of Vibes".to_string(),
        "hrbp".to_string(),
    ];
    let batch = matcher.match_batch(&titles, None);
    assert_eq!(batch.len(), titles.len());
    for title in &titles {
        assert_eq!(batch[title.as_str()], matcher.match_title(title, None));
    }
    assert_eq!(batch["Head of Vibes"].match_type, MatchType::None);
    assert_eq!(batch["Head of Vibes"].standardized_title, "Head of Vibes");
}

#[test]
fn saved_mapping_is_found_case_and_spacing_insensitively() {
    let matcher = RoleMatcher::new(MatcherConfig::default());
    let outcome = matcher
        .save_to_library(confirmed("Sr Eng", "Senior Software Engineer"))
        .unwrap();
    assert_eq!(outcome, UpsertOutcome::Inserted);

    let hit = matcher.match_title("sr eng", None);
    assert_eq!(hit.match_type, MatchType::Exact);
    assert!((hit.confidence - 1.0).abs() < f64::EPSILON);
    assert_eq!(hit.standardized_title, "Senior Software Engineer");

    let stored = matcher
        .store()
        .get(&MappingKey::new("senior eng", &OrgContext::default()))
        .unwrap()
        .unwrap();
    assert_eq!(stored.verified_count, 1);
    assert_eq!(stored.reported_count, 0);
}

#[test]
fn resaving_counts_as_verification() {
    let matcher = RoleMatcher::new(MatcherConfig::default());
    matcher.save_to_library(confirmed("Dev", "Software Engineer")).unwrap();
    let outcome = matcher
        .save_to_library(confirmed("dev", "Software Engineer"))
        .unwrap();
    assert_eq!(outcome, UpsertOutcome::Refreshed);

    let entries: Vec<RoleMappingEntry> = matcher.store().snapshot().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].verified_count, 2);
}

#[test]
fn library_wins_over_taxonomy() {
    let matcher = RoleMatcher::new(MatcherConfig::default());
    matcher
        .save_to_library(confirmed("PM", "Project Manager"))
        .unwrap();
    let hit = matcher.match_title("PM", None);
    assert_eq!(hit.match_type, MatchType::Exact);
    assert_eq!(hit.standardized_title, "Project Manager");
}

#[test]
fn fuzzy_threshold_is_configurable() {
    let strict = RoleMatcher::new(MatcherConfig {
        fuzzy_threshold: 0.95,
        ..MatcherConfig::default()
    });
    assert_eq!(
        strict.match_title("Sofware Enginer", None).match_type,
        MatchType::None
    );
}

#[test]
fn concurrent_writers_converge() {
    let matcher = Arc::new(RoleMatcher::with_store(
        Taxonomy::builtin(),
        InMemoryMappingStore::new(),
        MatcherConfig::default(),
    ));

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let matcher = Arc::clone(&matcher);
            scope.spawn(move || {
                for _ in 0..25 {
                    matcher
                        .save_to_library(confirmed("Wizard", "Software Engineer"))
                        .unwrap();
                    matcher.report_mapping("wizard", None).unwrap();
                }
            });
        }
    });

    let entries = matcher.store().snapshot().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].verified_count, 100);
    assert_eq!(entries[0].reported_count, 100);
}

#[test]
fn empty_title_cannot_be_saved() {
    let matcher = RoleMatcher::new(MatcherConfig::default());
    let err = matcher
        .save_to_library(confirmed("!!!", "Software Engineer"))
        .unwrap_err();
    assert!(matches!(err, MatchError::EmptyTitle(_)));
}

/// A store whose backend is down for every call.
struct OfflineStore;

impl OfflineStore {
    fn down<T>() -> Result<T, MatchError> {
        Err(MatchError::Store("connection refused".into()))
    }
}

impl MappingStore for OfflineStore {
    fn get(&self, _key: &MappingKey) -> Result<Option<RoleMappingEntry>, MatchError> {
        Self::down()
    }

    fn entries_for_title(&self, _normalized_title: &str) -> Result<Vec<RoleMappingEntry>, MatchError> {
        Self::down()
    }

    fn upsert(&self, _entry: RoleMappingEntry) -> Result<UpsertOutcome, MatchError> {
        Self::down()
    }

    fn increment_verified(&self, _key: &MappingKey, _at: DateTime<Utc>) -> Result<bool, MatchError> {
        Self::down()
    }

    fn increment_reported(&self, _key: &MappingKey, _at: DateTime<Utc>) -> Result<bool, MatchError> {
        Self::down()
    }

    fn snapshot(&self) -> Result<Vec<RoleMappingEntry>, MatchError> {
        Self::down()
    }
}

#[test]
fn unreadable_library_is_noted_in_the_source() {
    let matcher = RoleMatcher::with_store(Taxonomy::builtin(), OfflineStore, MatcherConfig::default());

    let ceo = matcher.match_title("CEO", None);
    assert_eq!(ceo.match_type, MatchType::Taxonomy);
    assert_eq!(ceo.standardized_title, "Chief Executive Officer");
    let source = ceo.source.unwrap();
    assert!(source.starts_with("taxonomy "), "{source}");
    assert!(source.ends_with(&format!("({LIBRARY_UNAVAILABLE})")), "{source}");

    let fuzzy = matcher.match_title("Data Scientst", None);
    assert_eq!(fuzzy.match_type, MatchType::Fuzzy);
    assert!(fuzzy.source.unwrap().contains(LIBRARY_UNAVAILABLE));

    let unknown = matcher.match_title("Head of Vibes", None);
    assert_eq!(unknown.match_type, MatchType::None);
    assert_eq!(unknown.source.as_deref(), Some(LIBRARY_UNAVAILABLE));
}

#[test]
fn healthy_library_miss_leaves_the_source_alone() {
    let matcher = RoleMatcher::new(MatcherConfig::default());
    assert_eq!(matcher.match_title("Head of Vibes", None).source, None);
    let ceo = matcher.match_title("CEO", None).source.unwrap();
    assert!(!ceo.contains(LIBRARY_UNAVAILABLE), "{ceo}");
}
