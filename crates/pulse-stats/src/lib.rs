//! # pulse-stats
//!
//! Numeric primitives used by every other Pulse component.
//!
//! All functions are total: empty input, zero variance and other degenerate
//! cases resolve to `0.0` instead of panicking or producing `NaN`/infinity.
//! Inputs are borrowed and never reordered; anything that needs sorted data
//! sorts a copy.

use std::cmp::Ordering;

/// Arithmetic sum; `0.0` for empty input.
#[must_use]
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Arithmetic mean; `0.0` for empty input.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    sum(values) / values.len() as f64
}

/// Median of a copy of `values`; even lengths average the two middle elements.
/// `0.0` for empty input.
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sorted = sorted_copy(values);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        f64::midpoint(sorted[mid - 1], sorted[mid])
    } else {
        sorted[mid]
    }
}

/// Population standard deviation (divides by `n`, not `n - 1`).
/// `0.0` for fewer than two values.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn standard_deviation(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = average(values);
    let variance = values
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// Nearest-rank percentile: the element at 1-based rank
/// `ceil(p / 100 * n)`, clamped to `[1, n]`, of a sorted copy.
/// `0.0` for empty input.
///
/// ```
/// let xs: Vec<f64> = (1..=10).map(f64::from).collect();
/// assert_eq!(pulse_stats::percentile(&xs, 25.0), 3.0);
/// assert_eq!(pulse_stats::percentile(&xs, 90.0), 9.0);
/// ```
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sorted = sorted_copy(values);
    let n = sorted.len();
    let raw_rank = (p / 100.0 * n as f64).ceil();
    // NaN and negative ranks land on the first element.
    let rank = if raw_rank.is_nan() || raw_rank < 1.0 {
        1
    } else if raw_rank >= n as f64 {
        n
    } else {
        raw_rank as usize
    };
    sorted[rank - 1]
}

/// Standard score `(value - mean) / std_dev`; `0.0` when `std_dev` is zero or
/// the result would not be finite.
#[must_use]
pub fn z_score(value: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev == 0.0 {
        return 0.0;
    }
    let z = (value - mean) / std_dev;
    if z.is_finite() { z } else { 0.0 }
}

/// Linear interpolation of `y` at `x` between `(x0, y0)` and `(x1, y1)`.
/// Returns `y0` when the two anchors share an `x`.
#[must_use]
pub fn interpolate(x: f64, (x0, y0): (f64, f64), (x1, y1): (f64, f64)) -> f64 {
    let span = x1 - x0;
    if span == 0.0 {
        return y0;
    }
    (x - x0).mul_add((y1 - y0) / span, y0)
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}
