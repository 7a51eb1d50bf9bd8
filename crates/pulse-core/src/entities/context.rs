use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::CompanySize;

/// Organizational context used to scope role mappings and benchmark rows.
///
/// Every field is optional; `None` means "unspecified" rather than "any".
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub struct OrgContext {
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub company_size: Option<CompanySize>,
}

impl OrgContext {
    /// Canonical form: trimmed, lowercased, blank strings dropped.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let clean = |v: &Option<String>| {
            v.as_deref()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
        };
        Self {
            industry: clean(&self.industry),
            region: clean(&self.region),
            company_size: self.company_size,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.industry.is_none() && self.region.is_none() && self.company_size.is_none()
    }

    /// Whether any field is set on both sides with different values.
    #[must_use]
    pub fn conflicts_with(&self, other: &Self) -> bool {
        let a = self.normalized();
        let b = other.normalized();
        differs(a.industry.as_ref(), b.industry.as_ref())
            || differs(a.region.as_ref(), b.region.as_ref())
            || differs(a.company_size.as_ref(), b.company_size.as_ref())
    }

    /// Number of fields set on both sides with equal values.
    #[must_use]
    pub fn affinity(&self, other: &Self) -> usize {
        let a = self.normalized();
        let b = other.normalized();
        usize::from(agrees(a.industry.as_ref(), b.industry.as_ref()))
            + usize::from(agrees(a.region.as_ref(), b.region.as_ref()))
            + usize::from(agrees(a.company_size.as_ref(), b.company_size.as_ref()))
    }
}

fn differs<T: PartialEq>(a: Option<&T>, b: Option<&T>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x != y)
}

fn agrees<T: PartialEq>(a: Option<&T>, b: Option<&T>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x == y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(industry: Option<&str>, region: Option<&str>) -> OrgContext {
        OrgContext {
            industry: industry.map(str::to_string),
            region: region.map(str::to_string),
            company_size: None,
        }
    }

    #[test]
    fn normalization_is_case_and_space_insensitive() {
        let a = ctx(Some("  SaaS "), Some(""));
        assert_eq!(a.normalized(), ctx(Some("saas"), None));
    }

    #[test]
    fn unset_fields_never_conflict() {
        assert!(!ctx(Some("saas"), None).conflicts_with(&ctx(None, Some("emea"))));
        assert!(ctx(Some("saas"), None).conflicts_with(&ctx(Some("fintech"), None)));
    }

    #[test]
    fn affinity_counts_shared_fields() {
        let query = ctx(Some("SaaS"), Some("EMEA"));
        assert_eq!(query.affinity(&ctx(Some("saas"), Some("emea"))), 2);
        assert_eq!(query.affinity(&ctx(Some("saas"), None)), 1);
        assert_eq!(query.affinity(&OrgContext::default()), 0);
    }
}
