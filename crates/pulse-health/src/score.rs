//! Mapping a KPI value onto its benchmark range.

use pulse_core::entities::BenchmarkRange;
use pulse_core::enums::Polarity;

/// Score a value against a benchmark range on [0, 100].
///
/// At or below `low` scores 0, the median scores 50, at or above `high`
/// scores 100, linear in between. [`Polarity::LowerIsBetter`] mirrors the
/// scale so that a healthier value always scores higher; the median still
/// scores 50.
#[must_use]
pub fn score_kpi(value: f64, range: &BenchmarkRange, polarity: Polarity) -> f64 {
    let raw = linear_score(value, range);
    match polarity {
        Polarity::HigherIsBetter => raw,
        Polarity::LowerIsBetter => 100.0 - raw,
    }
}

#[allow(clippy::float_cmp)]
fn linear_score(value: f64, range: &BenchmarkRange) -> f64 {
    let BenchmarkRange { low, median, high } = *range;
    let score = if value == median {
        50.0
    } else if value <= low {
        0.0
    } else if value >= high {
        100.0
    } else if value < median {
        pulse_stats::interpolate(value, (low, 0.0), (median, 50.0))
    } else {
        pulse_stats::interpolate(value, (median, 50.0), (high, 100.0))
    };
    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const RANGE: BenchmarkRange = BenchmarkRange::new(10.0, 20.0, 40.0);

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(10.0, 0.0)]
    #[case(15.0, 25.0)]
    #[case(20.0, 50.0)]
    #[case(30.0, 75.0)]
    #[case(40.0, 100.0)]
    #[case(1_000.0, 100.0)]
    fn higher_is_better(#[case] value: f64, #[case] expected: f64) {
        let score = score_kpi(value, &RANGE, Polarity::HigherIsBetter);
        assert!((score - expected).abs() < 1e-9, "{value} -> {score}");
    }

    #[rstest]
    #[case(5.0, 100.0)]
    #[case(20.0, 50.0)]
    #[case(30.0, 25.0)]
    #[case(50.0, 0.0)]
    fn lower_is_better_mirrors(#[case] value: f64, #[case] expected: f64) {
        let score = score_kpi(value, &RANGE, Polarity::LowerIsBetter);
        assert!((score - expected).abs() < 1e-9, "{value} -> {score}");
    }

    #[test]
    fn degenerate_range_keeps_median_at_fifty() {
        let flat = BenchmarkRange::new(5.0, 5.0, 5.0);
        assert!((score_kpi(5.0, &flat, Polarity::HigherIsBetter) - 50.0).abs() < 1e-9);
        assert!(score_kpi(4.0, &flat, Polarity::HigherIsBetter).abs() < 1e-9);
        assert!((score_kpi(6.0, &flat, Polarity::HigherIsBetter) - 100.0).abs() < 1e-9);
    }
}
