use std::fmt;

use serde::{Deserialize, Serialize};

/// A benchmark dimension that selection may ignore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    CompanySize,
    Region,
    Industry,
    Seniority,
    StandardizedTitle,
}

impl Dimension {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CompanySize => "company_size",
            Self::Region => "region",
            Self::Industry => "industry",
            Self::Seniority => "seniority",
            Self::StandardizedTitle => "standardized_title",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How far selection had to relax before finding rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionTier {
    Exact,
    AnyCompanySize,
    AnyRegion,
    AnyIndustry,
    AnySeniority,
    /// Average over every title in the role family. Only produced by
    /// [`crate::BenchmarkSelector::family_average`].
    FamilyAverage,
}

impl SelectionTier {
    /// Tiers tried by `select`, most specific first.
    pub const RELAXATION_ORDER: [Self; 5] = [
        Self::Exact,
        Self::AnyCompanySize,
        Self::AnyRegion,
        Self::AnyIndustry,
        Self::AnySeniority,
    ];

    /// Dimensions ignored at this tier. Relaxation is cumulative.
    #[must_use]
    pub const fn relaxed(self) -> &'static [Dimension] {
        use Dimension::{CompanySize, Industry, Region, Seniority, StandardizedTitle};
        match self {
            Self::Exact => &[],
            Self::AnyCompanySize => &[CompanySize],
            Self::AnyRegion => &[CompanySize, Region],
            Self::AnyIndustry => &[CompanySize, Region, Industry],
            Self::AnySeniority => &[CompanySize, Region, Industry, Seniority],
            Self::FamilyAverage => &[CompanySize, Region, Industry, Seniority, StandardizedTitle],
        }
    }

    #[must_use]
    pub fn relaxes(self, dimension: Dimension) -> bool {
        self.relaxed().contains(&dimension)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::AnyCompanySize => "any_company_size",
            Self::AnyRegion => "any_region",
            Self::AnyIndustry => "any_industry",
            Self::AnySeniority => "any_seniority",
            Self::FamilyAverage => "family_average",
        }
    }
}

impl fmt::Display for SelectionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
