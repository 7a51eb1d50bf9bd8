//! Classification enums for Pulse.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` returning the same representation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// SeniorityLevel
// ---------------------------------------------------------------------------

/// Rank within a role family, ordered from most junior to most senior.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SeniorityLevel {
    Entry,
    Junior,
    Mid,
    Senior,
    Lead,
    Manager,
    Director,
    Vp,
    CLevel,
}

impl SeniorityLevel {
    pub const ALL: [Self; 9] = [
        Self::Entry,
        Self::Junior,
        Self::Mid,
        Self::Senior,
        Self::Lead,
        Self::Manager,
        Self::Director,
        Self::Vp,
        Self::CLevel,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Junior => "junior",
            Self::Mid => "mid",
            Self::Senior => "senior",
            Self::Lead => "lead",
            Self::Manager => "manager",
            Self::Director => "director",
            Self::Vp => "vp",
            Self::CLevel => "c_level",
        }
    }

    /// Whether this level carries people-management responsibility.
    #[must_use]
    pub const fn is_management(self) -> bool {
        matches!(
            self,
            Self::Manager | Self::Director | Self::Vp | Self::CLevel
        )
    }

    /// Leniently parse a free-text level such as `"Sr."`, `"VP Sales"` or
    /// `"c_level"`. The most senior keyword present wins.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.is_empty() {
            return None;
        }
        let has = |words: &[&str]| tokens.iter().any(|t| words.contains(t));

        if has(&[
            "chief", "ceo", "cto", "cfo", "coo", "cmo", "cpo", "cro", "chro", "cio", "ciso",
        ]) || lowered.contains("c_level")
            || lowered.contains("c-level")
            || lowered.contains("c level")
        {
            return Some(Self::CLevel);
        }
        if has(&["vp", "svp", "evp", "avp"]) || lowered.contains("vice president") {
            return Some(Self::Vp);
        }
        if has(&["director", "head"]) {
            return Some(Self::Director);
        }
        if has(&["manager", "mgr"]) {
            return Some(Self::Manager);
        }
        if has(&["lead", "principal", "staff"]) {
            return Some(Self::Lead);
        }
        if has(&["senior", "sr"]) {
            return Some(Self::Senior);
        }
        if has(&["mid", "intermediate"]) {
            return Some(Self::Mid);
        }
        if has(&["junior", "jr", "associate"]) {
            return Some(Self::Junior);
        }
        if has(&["entry", "intern", "graduate", "trainee", "apprentice"]) {
            return Some(Self::Entry);
        }
        None
    }
}

impl fmt::Display for SeniorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EmploymentType
// ---------------------------------------------------------------------------

/// Contractual relationship of a worker to the organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    #[default]
    FullTime,
    PartTime,
    Contractor,
    Intern,
    Temporary,
}

impl EmploymentType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullTime => "full_time",
            Self::PartTime => "part_time",
            Self::Contractor => "contractor",
            Self::Intern => "intern",
            Self::Temporary => "temporary",
        }
    }

    /// Contingent workers are not on the payroll headcount proper.
    #[must_use]
    pub const fn is_contingent(self) -> bool {
        matches!(self, Self::Contractor | Self::Temporary)
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CompanySize
// ---------------------------------------------------------------------------

/// Company-size bucket used for benchmark segmentation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CompanySize {
    /// 1-50 employees.
    Startup,
    /// 51-200 employees.
    Small,
    /// 201-1000 employees.
    Medium,
    /// 1001-5000 employees.
    Large,
    /// More than 5000 employees.
    Enterprise,
}

impl CompanySize {
    /// Bucket an absolute headcount.
    #[must_use]
    pub const fn from_headcount(headcount: usize) -> Self {
        match headcount {
            0..=50 => Self::Startup,
            51..=200 => Self::Small,
            201..=1000 => Self::Medium,
            1001..=5000 => Self::Large,
            _ => Self::Enterprise,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Enterprise => "enterprise",
        }
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MatchType
// ---------------------------------------------------------------------------

/// Which stage of the title matcher produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// Learned mapping library hit.
    Exact,
    /// Canonical taxonomy alias hit.
    Taxonomy,
    /// Similarity score above the configured threshold.
    Fuzzy,
    /// Nothing identified; needs manual mapping.
    None,
}

impl MatchType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Taxonomy => "taxonomy",
            Self::Fuzzy => "fuzzy",
            Self::None => "none",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CalculationMethod
// ---------------------------------------------------------------------------

/// How a compensation target was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMethod {
    BenchmarkMatch,
    Interpolated,
    FallbackIndustryAvg,
    Manual,
}

impl CalculationMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BenchmarkMatch => "benchmark_match",
            Self::Interpolated => "interpolated",
            Self::FallbackIndustryAvg => "fallback_industry_avg",
            Self::Manual => "manual",
        }
    }
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CompensationBasis
// ---------------------------------------------------------------------------

/// Which compensation figure benchmark bands and targets refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CompensationBasis {
    #[default]
    TotalCompensation,
    BaseSalary,
}

impl CompensationBasis {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TotalCompensation => "total_compensation",
            Self::BaseSalary => "base_salary",
        }
    }

    /// Field-name prefix used in explanations, e.g. `p50TotalComp`.
    #[must_use]
    pub const fn field_suffix(self) -> &'static str {
        match self {
            Self::TotalCompensation => "TotalComp",
            Self::BaseSalary => "BaseSalary",
        }
    }
}

impl fmt::Display for CompensationBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// KpiCategory / KpiUnit / Polarity
// ---------------------------------------------------------------------------

/// Health-score category a KPI contributes to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum KpiCategory {
    Workforce,
    Compensation,
    Productivity,
    Retention,
}

impl KpiCategory {
    pub const ALL: [Self; 4] = [
        Self::Workforce,
        Self::Compensation,
        Self::Productivity,
        Self::Retention,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Workforce => "workforce",
            Self::Compensation => "compensation",
            Self::Productivity => "productivity",
            Self::Retention => "retention",
        }
    }
}

impl fmt::Display for KpiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum KpiUnit {
    Count,
    Currency,
    Percent,
    Ratio,
    Years,
}

impl KpiUnit {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Currency => "currency",
            Self::Percent => "percent",
            Self::Ratio => "ratio",
            Self::Years => "years",
        }
    }
}

/// Whether a higher KPI value is healthier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    #[default]
    HigherIsBetter,
    LowerIsBetter,
}

// ---------------------------------------------------------------------------
// Grade
// ---------------------------------------------------------------------------

/// Letter grade for a composite health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Grade a [0, 100] score: A >= 90, B >= 80, C >= 70, D >= 60, else F.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::A
        } else if score >= 80.0 {
            Self::B
        } else if score >= 70.0 {
            Self::C
        } else if score >= 60.0 {
            Self::D
        } else {
            Self::F
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Sr.", Some(SeniorityLevel::Senior))]
    #[case("senior", Some(SeniorityLevel::Senior))]
    #[case("Jr", Some(SeniorityLevel::Junior))]
    #[case("VP Sales", Some(SeniorityLevel::Vp))]
    #[case("Vice President", Some(SeniorityLevel::Vp))]
    #[case("c_level", Some(SeniorityLevel::CLevel))]
    #[case("Chief Executive Officer", Some(SeniorityLevel::CLevel))]
    #[case("Head of Design", Some(SeniorityLevel::Director))]
    #[case("Engineering Manager", Some(SeniorityLevel::Manager))]
    #[case("Staff", Some(SeniorityLevel::Lead))]
    #[case("intern", Some(SeniorityLevel::Entry))]
    #[case("", None)]
    #[case("L4", None)]
    fn seniority_parses_free_text(#[case] input: &str, #[case] expected: Option<SeniorityLevel>) {
        assert_eq!(SeniorityLevel::parse(input), expected);
    }

    #[test]
    fn most_senior_keyword_wins() {
        assert_eq!(
            SeniorityLevel::parse("Senior Manager"),
            Some(SeniorityLevel::Manager)
        );
    }

    #[test]
    fn seniority_serializes_snake_case() {
        let json = serde_json::to_string(&SeniorityLevel::CLevel).unwrap();
        assert_eq!(json, "\"c_level\"");
        for level in SeniorityLevel::ALL {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.as_str()));
        }
    }

    #[test]
    fn management_levels() {
        assert!(!SeniorityLevel::Lead.is_management());
        assert!(SeniorityLevel::Manager.is_management());
        assert!(SeniorityLevel::CLevel.is_management());
    }

    #[test]
    fn company_size_buckets() {
        assert_eq!(CompanySize::from_headcount(0), CompanySize::Startup);
        assert_eq!(CompanySize::from_headcount(50), CompanySize::Startup);
        assert_eq!(CompanySize::from_headcount(51), CompanySize::Small);
        assert_eq!(CompanySize::from_headcount(1000), CompanySize::Medium);
        assert_eq!(CompanySize::from_headcount(5001), CompanySize::Enterprise);
    }

    #[test]
    fn grade_thresholds() {
        assert_eq!(Grade::from_score(95.0), Grade::A);
        assert_eq!(Grade::from_score(90.0), Grade::A);
        assert_eq!(Grade::from_score(89.9), Grade::B);
        assert_eq!(Grade::from_score(70.0), Grade::C);
        assert_eq!(Grade::from_score(60.0), Grade::D);
        assert_eq!(Grade::from_score(12.0), Grade::F);
    }

    #[test]
    fn calculation_method_matches_wire_names() {
        let json = serde_json::to_string(&CalculationMethod::FallbackIndustryAvg).unwrap();
        assert_eq!(json, "\"fallback_industry_avg\"");
        assert_eq!(MatchType::None.to_string(), "none");
    }
}
