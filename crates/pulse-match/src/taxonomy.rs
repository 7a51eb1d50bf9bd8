//! Canonical role taxonomy.
//!
//! Read-only reference data. Lookup is by normalized key: every alias and every
//! standardized title of an entry is indexed. When two entries claim the same
//! key the first one registered keeps it.

use std::collections::HashMap;

use pulse_core::entities::TaxonomyEntry;
use pulse_core::enums::SeniorityLevel;

use crate::normalize::normalize;

/// Version tag of [`Taxonomy::builtin`].
pub const BUILTIN_TAXONOMY_VERSION: &str = "2025.1";

/// Indexed, versioned set of canonical role definitions.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    version: String,
    entries: Vec<TaxonomyEntry>,
    /// Normalized alias/title key -> entry index.
    alias_index: HashMap<String, usize>,
    /// Normalized standardized title per entry, for fuzzy comparison.
    title_keys: Vec<String>,
}

impl Taxonomy {
    /// Build and index a taxonomy.
    #[must_use]
    pub fn new(version: impl Into<String>, entries: Vec<TaxonomyEntry>) -> Self {
        let mut alias_index: HashMap<String, usize> = HashMap::new();
        let mut title_keys = Vec::with_capacity(entries.len());

        for (idx, entry) in entries.iter().enumerate() {
            let title_key = normalize(&entry.standardized_title).key;
            let names = std::iter::once(entry.standardized_title.as_str())
                .chain(entry.aliases.iter().map(String::as_str));
            for name in names {
                let key = normalize(name).key;
                if key.is_empty() {
                    continue;
                }
                if let Some(&existing) = alias_index.get(&key) {
                    if existing != idx {
                        tracing::debug!(
                            alias = name,
                            kept = %entries[existing].standardized_title,
                            dropped = %entry.standardized_title,
                            "taxonomy: duplicate alias, keeping first entry"
                        );
                    }
                    continue;
                }
                alias_index.insert(key, idx);
            }
            title_keys.push(title_key);
        }

        Self {
            version: version.into(),
            entries,
            alias_index,
            title_keys,
        }
    }

    /// The taxonomy shipped with Pulse.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(family, title, level, aliases)| TaxonomyEntry {
                role_family: (*family).to_string(),
                standardized_title: (*title).to_string(),
                seniority_level: *level,
                aliases: aliases.iter().map(|a| (*a).to_string()).collect(),
            })
            .collect();
        Self::new(BUILTIN_TAXONOMY_VERSION, entries)
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn entries(&self) -> &[TaxonomyEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact lookup of a normalized key against aliases and titles.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&TaxonomyEntry> {
        self.alias_index.get(key).map(|&idx| &self.entries[idx])
    }

    /// Entries paired with their normalized standardized title.
    pub fn titles(&self) -> impl Iterator<Item = (&str, &TaxonomyEntry)> {
        self.title_keys
            .iter()
            .map(String::as_str)
            .zip(self.entries.iter())
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

type BuiltinEntry = (
    &'static str,
    &'static str,
    Option<SeniorityLevel>,
    &'static [&'static str],
);

#[rustfmt::skip]
const BUILTIN: &[BuiltinEntry] = &[
    // Executive
    ("Executive", "Chief Executive Officer", Some(SeniorityLevel::CLevel), &["CEO", "Founder & CEO", "Co-Founder and CEO", "President and CEO", "Managing Director"]),
    ("Executive", "Chief Technology Officer", Some(SeniorityLevel::CLevel), &["CTO", "Co-Founder and CTO"]),
    ("Executive", "Chief Financial Officer", Some(SeniorityLevel::CLevel), &["CFO", "Finance Director"]),
    ("Executive", "Chief Operating Officer", Some(SeniorityLevel::CLevel), &["COO"]),
    ("Executive", "Chief Marketing Officer", Some(SeniorityLevel::CLevel), &["CMO"]),
    ("Executive", "Chief Product Officer", Some(SeniorityLevel::CLevel), &["CPO"]),
    ("Executive", "Chief People Officer", Some(SeniorityLevel::CLevel), &["CHRO", "Chief Human Resources Officer"]),
    // Engineering
    ("Engineering", "Junior Software Engineer", Some(SeniorityLevel::Junior), &["Graduate Software Engineer", "Entry Level Software Engineer", "Associate Software Engineer", "Junior Developer"]),
    ("Engineering", "Software Engineer", Some(SeniorityLevel::Mid), &["Developer", "Software Developer", "Programmer", "SWE", "Backend Engineer", "Frontend Engineer", "Backend Developer", "Frontend Developer", "Full Stack Engineer", "Full Stack Developer", "Web Developer"]),
    ("Engineering", "Senior Software Engineer", Some(SeniorityLevel::Senior), &["Senior Developer", "Senior Backend Engineer", "Senior Frontend Engineer", "Senior Full Stack Engineer"]),
    ("Engineering", "Staff Software Engineer", Some(SeniorityLevel::Lead), &["Staff Engineer", "Tech Lead", "Technical Lead", "Lead Developer", "Lead Software Engineer"]),
    ("Engineering", "Principal Software Engineer", Some(SeniorityLevel::Lead), &["Principal Engineer", "Software Architect"]),
    ("Engineering", "Engineering Manager", Some(SeniorityLevel::Manager), &["Software Engineering Manager", "Development Manager"]),
    ("Engineering", "Director of Engineering", Some(SeniorityLevel::Director), &["Engineering Director", "Head of Engineering"]),
    ("Engineering", "VP of Engineering", Some(SeniorityLevel::Vp), &["VP Engineering", "Vice President of Engineering", "VP Eng"]),
    ("Engineering", "DevOps Engineer", Some(SeniorityLevel::Mid), &["Site Reliability Engineer", "SRE", "Platform Engineer", "Infrastructure Engineer"]),
    ("Engineering", "QA Engineer", Some(SeniorityLevel::Mid), &["Quality Assurance Engineer", "Test Engineer", "SDET", "QA Analyst"]),
    // Data
    ("Data", "Data Analyst", Some(SeniorityLevel::Mid), &["Business Intelligence Analyst", "BI Analyst", "Analytics Specialist"]),
    ("Data", "Data Scientist", Some(SeniorityLevel::Mid), &["Applied Scientist"]),
    ("Data", "Data Engineer", Some(SeniorityLevel::Mid), &["Analytics Engineer", "ETL Developer"]),
    ("Data", "Machine Learning Engineer", Some(SeniorityLevel::Mid), &["ML Engineer", "AI Engineer"]),
    // Product
    ("Product", "Product Manager", Some(SeniorityLevel::Mid), &["PM", "Product Owner"]),
    ("Product", "Senior Product Manager", Some(SeniorityLevel::Senior), &["Senior Product Owner"]),
    ("Product", "Director of Product", Some(SeniorityLevel::Director), &["Head of Product", "Product Director"]),
    // Design
    ("Design", "Product Designer", Some(SeniorityLevel::Mid), &["UX Designer", "UI Designer", "UX/UI Designer", "UI/UX Designer", "Interaction Designer"]),
    ("Design", "Senior Product Designer", Some(SeniorityLevel::Senior), &["Senior UX Designer", "Senior UI Designer"]),
    // Sales
    ("Sales", "Sales Development Representative", Some(SeniorityLevel::Junior), &["SDR", "BDR", "Business Development Representative"]),
    ("Sales", "Account Executive", Some(SeniorityLevel::Mid), &["AE", "Sales Executive"]),
    ("Sales", "Account Manager", Some(SeniorityLevel::Mid), &["Key Account Manager"]),
    ("Sales", "Sales Manager", Some(SeniorityLevel::Manager), &["Regional Sales Manager"]),
    ("Sales", "VP of Sales", Some(SeniorityLevel::Vp), &["VP Sales", "Vice President of Sales", "Head of Sales"]),
    // Marketing
    ("Marketing", "Marketing Coordinator", Some(SeniorityLevel::Junior), &["Marketing Assistant"]),
    ("Marketing", "Content Marketing Specialist", Some(SeniorityLevel::Mid), &["Content Marketer", "Content Writer", "Copywriter"]),
    ("Marketing", "Marketing Manager", Some(SeniorityLevel::Manager), &["Growth Marketing Manager", "Digital Marketing Manager"]),
    // Customer Success
    ("Customer Success", "Customer Support Specialist", Some(SeniorityLevel::Junior), &["Customer Support Representative", "Support Agent", "Customer Service Representative"]),
    ("Customer Success", "Customer Success Manager", Some(SeniorityLevel::Mid), &["CSM", "Client Success Manager"]),
    // Finance
    ("Finance", "Accountant", Some(SeniorityLevel::Mid), &["Staff Accountant", "Bookkeeper"]),
    ("Finance", "Financial Analyst", Some(SeniorityLevel::Mid), &["FP&A Analyst", "Finance Analyst"]),
    ("Finance", "Controller", Some(SeniorityLevel::Director), &["Financial Controller", "Finance Controller"]),
    // People
    ("People", "Recruiter", Some(SeniorityLevel::Mid), &["Talent Acquisition Specialist", "Technical Recruiter", "Talent Partner"]),
    ("People", "HR Generalist", Some(SeniorityLevel::Mid), &["Human Resources Generalist", "People Operations Specialist"]),
    ("People", "HR Business Partner", Some(SeniorityLevel::Senior), &["HRBP", "People Business Partner"]),
    // Operations
    ("Operations", "Operations Manager", Some(SeniorityLevel::Manager), &["Business Operations Manager"]),
    ("Operations", "Office Manager", Some(SeniorityLevel::Mid), &["Office Administrator"]),
    ("Operations", "Executive Assistant", Some(SeniorityLevel::Mid), &["EA", "Personal Assistant", "Administrative Assistant"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_indexed_by_title_and_alias() {
        let taxonomy = Taxonomy::builtin();
        assert_eq!(taxonomy.version(), BUILTIN_TAXONOMY_VERSION);
        assert!(!taxonomy.is_empty());

        let by_alias = taxonomy.lookup("ceo").expect("CEO alias");
        assert_eq!(by_alias.standardized_title, "Chief Executive Officer");

        let by_title = taxonomy.lookup("data scientist").expect("title");
        assert_eq!(by_title.role_family, "Data");
    }

    #[test]
    fn alias_lookup_goes_through_normalization() {
        let taxonomy = Taxonomy::builtin();
        let key = normalize("Sr. Developer").key;
        let entry = taxonomy.lookup(&key).expect("senior developer alias");
        assert_eq!(entry.standardized_title, "Senior Software Engineer");
    }

    #[test]
    fn builtin_aliases_are_unique() {
        let mut seen = HashMap::new();
        for (family, title, _, aliases) in BUILTIN {
            for name in std::iter::once(title).chain(aliases.iter()) {
                let key = normalize(name).key;
                if let Some(previous) = seen.insert(key.clone(), *title) {
                    panic!("{key:?} claimed by both {previous} and {title} ({family})");
                }
            }
        }
    }

    #[test]
    fn first_registration_keeps_duplicate_alias() {
        let entry = |title: &str| TaxonomyEntry {
            role_family: "Ops".into(),
            standardized_title: title.into(),
            seniority_level: None,
            aliases: vec!["Coordinator".into()],
        };
        let taxonomy = Taxonomy::new("t", vec![entry("First"), entry("Second")]);
        assert_eq!(
            taxonomy.lookup("coordinator").map(|e| e.standardized_title.as_str()),
            Some("First")
        );
        assert_eq!(taxonomy.titles().count(), 2);
    }
}
