//! Cost anomaly signal over a historical series.

use pulse_core::entities::CostSignal;

/// Minimum series length: one latest point plus a two-point baseline.
pub const MIN_SERIES_LEN: usize = 3;

/// How unusual the latest point of a cost or compensation series is.
///
/// The latest value is z-scored against the mean and population standard
/// deviation of every earlier point. Non-finite points are dropped first.
/// `None` for fewer than [`MIN_SERIES_LEN`] points.
#[must_use]
pub fn cost_signal(series: &[f64]) -> Option<CostSignal> {
    let points: Vec<f64> = series.iter().copied().filter(|v| v.is_finite()).collect();
    if points.len() < MIN_SERIES_LEN {
        return None;
    }
    let (&latest, baseline) = points.split_last()?;
    let &previous = baseline.last()?;

    let baseline_mean = pulse_stats::average(baseline);
    let baseline_std_dev = pulse_stats::standard_deviation(baseline);
    let change_pct = (previous != 0.0)
        .then(|| (latest - previous) / previous.abs() * 100.0)
        .filter(|v| v.is_finite());

    Some(CostSignal {
        latest,
        baseline_mean,
        baseline_std_dev,
        z_score: pulse_stats::z_score(latest, baseline_mean, baseline_std_dev),
        change_pct,
    })
}
