//! # pulse-match
//!
//! Resolves free-text job titles to canonical roles.
//!
//! A title is normalized (case, punctuation, diacritics, abbreviations,
//! seniority decorations) and then tried against, in order:
//!
//! 1. the learned mapping library ([`MappingStore`]), `exact`, confidence 1.0
//! 2. taxonomy aliases ([`Taxonomy`]), `taxonomy`
//! 3. fuzzy similarity against canonical titles, `fuzzy`, confidence = score
//!
//! Anything else is `none` and needs a manual mapping, which
//! [`RoleMatcher::save_to_library`] records for next time.

pub mod error;
pub mod matcher;
pub mod normalize;
pub mod similarity;
pub mod store;
pub mod taxonomy;

pub use error::MatchError;
pub use matcher::{LIBRARY_UNAVAILABLE, NewMapping, RoleMatcher, Suggestion};
pub use normalize::{NormalizedTitle, SeniorityHint, normalize};
pub use store::{InMemoryMappingStore, MappingStore, UpsertOutcome};
pub use taxonomy::{BUILTIN_TAXONOMY_VERSION, Taxonomy};
