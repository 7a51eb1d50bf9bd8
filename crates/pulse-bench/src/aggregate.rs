//! Band aggregation across several benchmark rows.

use std::collections::BTreeSet;

use pulse_core::entities::{BenchmarkRow, PercentileBands, STANDARD_PERCENTILES};

/// Merge rows into one synthetic row.
///
/// Each percentile band is the plain average over the rows that publish it.
/// Descriptive fields keep their value only when every row agrees; sample
/// sizes add up. `None` for an empty slice.
#[must_use]
pub fn merge_rows(rows: &[&BenchmarkRow]) -> Option<BenchmarkRow> {
    let first = rows.first()?;
    if rows.len() == 1 {
        return Some((*first).clone());
    }

    let currency = common(rows.iter().map(|r| &r.currency)).map_or_else(
        || {
            tracing::warn!(
                rows = rows.len(),
                kept = %first.currency,
                "bench: merging rows with mixed currencies"
            );
            first.currency.clone()
        },
        Clone::clone,
    );

    let standardized_title = common(rows.iter().map(|r| &r.standardized_title))
        .cloned()
        .unwrap_or_else(|| format!("{} (all titles)", first.role_family));

    let sources: BTreeSet<&str> = rows.iter().filter_map(|r| r.source.as_deref()).collect();

    Some(BenchmarkRow {
        role_family: first.role_family.clone(),
        standardized_title,
        seniority_level: common(rows.iter().map(|r| &r.seniority_level)).copied().flatten(),
        industry: common(rows.iter().map(|r| &r.industry)).cloned().flatten(),
        region: common(rows.iter().map(|r| &r.region)).cloned().flatten(),
        company_size: common(rows.iter().map(|r| &r.company_size)).copied().flatten(),
        currency,
        sample_size: rows
            .iter()
            .fold(0_u32, |acc, r| acc.saturating_add(r.sample_size)),
        source: if sources.is_empty() {
            None
        } else {
            Some(sources.into_iter().collect::<Vec<_>>().join(", "))
        },
        total_compensation: average_bands(rows.iter().map(|r| &r.total_compensation)),
        base_salary: average_bands(rows.iter().map(|r| &r.base_salary)),
    })
}

fn average_bands<'a>(bands: impl Iterator<Item = &'a PercentileBands> + Clone) -> PercentileBands {
    let mut merged = PercentileBands::default();
    for p in STANDARD_PERCENTILES {
        let values: Vec<f64> = bands
            .clone()
            .filter_map(|b| b.get(p))
            .filter(|v| v.is_finite())
            .collect();
        if !values.is_empty() {
            merged.set(p, Some(pulse_stats::average(&values)));
        }
    }
    merged
}

/// The shared value when every item is equal.
fn common<'a, T: PartialEq + 'a>(mut items: impl Iterator<Item = &'a T>) -> Option<&'a T> {
    let first = items.next()?;
    items.all(|item| item == first).then_some(first)
}
