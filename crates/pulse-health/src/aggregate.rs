use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use pulse_config::CategoryWeights;
use pulse_core::entities::{BenchmarkRange, HealthScoreSnapshot, KpiValue};
use pulse_core::enums::{Grade, KpiCategory};

use crate::error::HealthError;
use crate::score::score_kpi;

/// [`aggregate_at`] stamped with the current time.
///
/// # Errors
///
/// See [`aggregate_at`].
pub fn aggregate(
    kpi_values: &[KpiValue],
    benchmark_ranges: &BTreeMap<String, BenchmarkRange>,
    weights: &CategoryWeights,
    previous: Option<&HealthScoreSnapshot>,
) -> Result<HealthScoreSnapshot, HealthError> {
    aggregate_at(kpi_values, benchmark_ranges, weights, previous, Utc::now())
}

/// Combine KPI values into a composite health score.
///
/// A KPI is scored when it has a finite value and a benchmark range, taken
/// from `benchmark_ranges` by KPI id and else from its definition. The
/// first value for an id wins. A category scores the mean of its KPI
/// scores; categories without any are left out and the remaining weights are
/// renormalized to sum to 1. The returned snapshot has no cost signal.
///
/// # Errors
///
/// - [`HealthError::InvalidWeight`] for a negative or non-finite weight.
/// - [`HealthError::NoScorableCategories`] when no category with a positive
///   weight could be scored.
pub fn aggregate_at(
    kpi_values: &[KpiValue],
    benchmark_ranges: &BTreeMap<String, BenchmarkRange>,
    weights: &CategoryWeights,
    previous: Option<&HealthScoreSnapshot>,
    at: DateTime<Utc>,
) -> Result<HealthScoreSnapshot, HealthError> {
    for category in KpiCategory::ALL {
        let weight = weights.get(category);
        if !weight.is_finite() || weight < 0.0 {
            return Err(HealthError::InvalidWeight { category, weight });
        }
    }

    let mut kpi_scores: BTreeMap<String, f64> = BTreeMap::new();
    let mut by_category: BTreeMap<KpiCategory, Vec<f64>> = BTreeMap::new();

    for kpi in kpi_values {
        if kpi_scores.contains_key(&kpi.kpi_id) {
            continue;
        }
        let Some(value) = kpi.value.filter(|v| v.is_finite()) else {
            tracing::debug!(kpi = %kpi.kpi_id, "health: no value, excluded");
            continue;
        };
        let Some(range) = benchmark_ranges
            .get(&kpi.kpi_id)
            .or(kpi.definition.benchmark.as_ref())
        else {
            tracing::debug!(kpi = %kpi.kpi_id, "health: no benchmark range, excluded");
            continue;
        };
        if !range.is_well_formed() {
            tracing::warn!(kpi = %kpi.kpi_id, ?range, "health: malformed benchmark range, excluded");
            continue;
        }

        let score = score_kpi(value, range, kpi.definition.polarity);
        kpi_scores.insert(kpi.kpi_id.clone(), score);
        by_category
            .entry(kpi.definition.category)
            .or_default()
            .push(score);
    }

    let category_scores: BTreeMap<KpiCategory, f64> = by_category
        .iter()
        .map(|(&category, scores)| (category, pulse_stats::average(scores)))
        .collect();

    let total_weight: f64 = category_scores.keys().map(|&c| weights.get(c)).sum();
    if category_scores.is_empty() || total_weight <= 0.0 {
        return Err(HealthError::NoScorableCategories);
    }

    let effective_weights: BTreeMap<KpiCategory, f64> = category_scores
        .keys()
        .map(|&category| (category, weights.get(category) / total_weight))
        .collect();

    let composite_score = category_scores
        .iter()
        .map(|(category, score)| score * effective_weights[category])
        .sum::<f64>()
        .clamp(0.0, 100.0);

    let trend = previous.map(|snapshot| composite_score - snapshot.composite_score);

    tracing::info!(
        composite = composite_score,
        categories = category_scores.len(),
        kpis = kpi_scores.len(),
        ?trend,
        "health: score aggregated"
    );

    Ok(HealthScoreSnapshot {
        composite_score,
        grade: Grade::from_score(composite_score),
        category_scores,
        effective_weights,
        kpi_scores,
        trend,
        cost_signal: None,
        calculated_at: at,
    })
}
