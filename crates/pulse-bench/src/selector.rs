use pulse_config::BenchmarkConfig;
use pulse_core::entities::{BenchmarkRow, OrgContext, RoleMatch};
use pulse_core::enums::{CompanySize, SeniorityLevel};
use serde::{Deserialize, Serialize};

use crate::aggregate::merge_rows;
use crate::tier::{Dimension, SelectionTier};

/// The canonical role a benchmark is wanted for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkRole {
    pub role_family: String,
    pub standardized_title: String,
    #[serde(default)]
    pub seniority_level: Option<SeniorityLevel>,
}

impl BenchmarkRole {
    /// The role identified by a title match; `None` when the match did not
    /// resolve to a canonical role.
    #[must_use]
    pub fn from_match(matched: &RoleMatch) -> Option<Self> {
        if !matched.is_resolved() {
            return None;
        }
        Some(Self {
            role_family: matched.role_family.clone()?,
            standardized_title: matched.standardized_title.clone(),
            seniority_level: matched.seniority_level,
        })
    }
}

/// A chosen benchmark and how it was reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSelection {
    /// The single matching row, or the merge of several.
    pub row: BenchmarkRow,
    pub tier: SelectionTier,
    pub relaxed: Vec<Dimension>,
    /// Number of input rows merged into `row`.
    pub row_count: usize,
    /// Human-readable provenance, e.g. `"Radford 2025 (exact, 1 row, n=120)"`.
    pub source: String,
}

/// Selects benchmark rows for a role within a market context.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkSelector {
    config: BenchmarkConfig,
}

impl BenchmarkSelector {
    #[must_use]
    pub const fn new(config: BenchmarkConfig) -> Self {
        Self { config }
    }

    /// Best available benchmark for `role` in `context`.
    ///
    /// Walks [`SelectionTier::RELAXATION_ORDER`] and stops at the first tier
    /// with candidates. An unset context field matches any row; a row that
    /// leaves a constrained dimension unset does not match until that
    /// dimension is relaxed. `None` only when no eligible row shares the
    /// role family and standardized title.
    #[must_use]
    pub fn select(
        &self,
        role: &BenchmarkRole,
        context: &OrgContext,
        rows: &[BenchmarkRow],
    ) -> Option<BenchmarkSelection> {
        let context = context.normalized();
        let same_role: Vec<&BenchmarkRow> = rows
            .iter()
            .filter(|row| self.eligible(row))
            .filter(|row| {
                same_text(&row.role_family, &role.role_family)
                    && same_text(&row.standardized_title, &role.standardized_title)
            })
            .collect();

        if same_role.is_empty() {
            tracing::debug!(
                family = %role.role_family,
                title = %role.standardized_title,
                "bench: no rows for role"
            );
            return None;
        }

        for tier in SelectionTier::RELAXATION_ORDER {
            let candidates: Vec<&BenchmarkRow> = same_role
                .iter()
                .copied()
                .filter(|row| fits(row, role.seniority_level, &context, tier))
                .collect();
            if candidates.is_empty() {
                continue;
            }
            tracing::debug!(
                title = %role.standardized_title,
                %tier,
                rows = candidates.len(),
                "bench: tier selected"
            );
            let mut selection = build(tier, &candidates)?;
            // Rows may spell the role differently; report the queried role.
            selection.row.role_family.clone_from(&role.role_family);
            selection.row.standardized_title.clone_from(&role.standardized_title);
            return Some(selection);
        }

        // Unreachable in practice: the last tier ignores everything but the role.
        None
    }

    /// Average over every title in a role family.
    ///
    /// Rows from the context's industry are preferred when there are any;
    /// otherwise the whole family is used. `None` when the family has no
    /// eligible rows at all.
    #[must_use]
    pub fn family_average(
        &self,
        role_family: &str,
        context: &OrgContext,
        rows: &[BenchmarkRow],
    ) -> Option<BenchmarkSelection> {
        let family: Vec<&BenchmarkRow> = rows
            .iter()
            .filter(|row| self.eligible(row) && same_text(&row.role_family, role_family))
            .collect();

        let industry = context.normalized().industry;
        let in_industry: Vec<&BenchmarkRow> = family
            .iter()
            .copied()
            .filter(|row| {
                industry
                    .as_deref()
                    .is_some_and(|wanted| matches_text(row.industry.as_deref(), wanted))
            })
            .collect();
        let chosen = if in_industry.is_empty() { family } else { in_industry };
        if chosen.is_empty() {
            return None;
        }

        tracing::debug!(
            family = role_family,
            rows = chosen.len(),
            "bench: role family average"
        );
        let mut selection = build(SelectionTier::FamilyAverage, &chosen)?;
        selection.row.role_family = role_family.to_string();
        Some(selection)
    }

    fn eligible(&self, row: &BenchmarkRow) -> bool {
        row.sample_size >= self.config.min_sample_size
    }
}

fn build(tier: SelectionTier, rows: &[&BenchmarkRow]) -> Option<BenchmarkSelection> {
    let row = merge_rows(rows)?;
    let relaxed = tier.relaxed().to_vec();
    let source = provenance(&row, tier, &relaxed, rows.len());
    Some(BenchmarkSelection {
        row,
        tier,
        relaxed,
        row_count: rows.len(),
        source,
    })
}

fn provenance(row: &BenchmarkRow, tier: SelectionTier, relaxed: &[Dimension], count: usize) -> String {
    let name = row.source.as_deref().unwrap_or("unnamed survey");
    let rows = if count == 1 { "1 row".to_string() } else { format!("{count} rows") };
    let how = if relaxed.is_empty() {
        tier.to_string()
    } else {
        let dims: Vec<&str> = relaxed.iter().map(|d| d.as_str()).collect();
        format!("{tier}, relaxed {}", dims.join("/"))
    };
    format!("{name} ({how}, {rows}, n={})", row.sample_size)
}

fn fits(
    row: &BenchmarkRow,
    seniority: Option<SeniorityLevel>,
    context: &OrgContext,
    tier: SelectionTier,
) -> bool {
    let seniority_ok = tier.relaxes(Dimension::Seniority)
        || seniority.is_none_or(|wanted| row.seniority_level == Some(wanted));
    let industry_ok = tier.relaxes(Dimension::Industry)
        || context
            .industry
            .as_deref()
            .is_none_or(|wanted| matches_text(row.industry.as_deref(), wanted));
    let region_ok = tier.relaxes(Dimension::Region)
        || context
            .region
            .as_deref()
            .is_none_or(|wanted| matches_text(row.region.as_deref(), wanted));
    let size_ok = tier.relaxes(Dimension::CompanySize)
        || context
            .company_size
            .is_none_or(|wanted: CompanySize| row.company_size == Some(wanted));

    seniority_ok && industry_ok && region_ok && size_ok
}

fn matches_text(value: Option<&str>, wanted: &str) -> bool {
    value.is_some_and(|v| v.trim().eq_ignore_ascii_case(wanted))
}

fn same_text(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
