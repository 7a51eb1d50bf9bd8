//! Reading an arbitrary percentile from published bands.

use pulse_core::entities::PercentileBands;

/// How a percentile value was obtained from a set of bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BandReading {
    /// The percentile is a published band.
    Published(f64),
    /// Linear between the nearest published bands below and above.
    Interpolated {
        value: f64,
        lower: (f64, f64),
        upper: (f64, f64),
    },
    /// Only one side exists; the closest published band is used.
    Nearest { value: f64, percentile: f64 },
}

impl BandReading {
    #[must_use]
    pub const fn value(&self) -> f64 {
        match *self {
            Self::Published(value)
            | Self::Interpolated { value, .. }
            | Self::Nearest { value, .. } => value,
        }
    }

    #[must_use]
    pub const fn is_published(&self) -> bool {
        matches!(self, Self::Published(_))
    }

    /// Short note for explanations; empty for a published band.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Published(_) => String::new(),
            Self::Interpolated { lower, upper, .. } => format!(
                "interpolated between {} and {}",
                percentile_label(lower.0),
                percentile_label(upper.0)
            ),
            Self::Nearest { percentile, .. } => {
                format!("nearest available band {}", percentile_label(*percentile))
            }
        }
    }
}

/// Value at `percentile`, or `None` when no band is published at all.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn read_percentile(bands: &PercentileBands, percentile: f64) -> Option<BandReading> {
    let available = bands.available();
    if available.is_empty() {
        return None;
    }
    if let Some(&(_, value)) = available.iter().find(|(p, _)| *p == percentile) {
        return Some(BandReading::Published(value));
    }

    let lower = available.iter().rev().find(|(p, _)| *p < percentile).copied();
    let upper = available.iter().find(|(p, _)| *p > percentile).copied();
    match (lower, upper) {
        (Some(lower), Some(upper)) => Some(BandReading::Interpolated {
            value: pulse_stats::interpolate(percentile, lower, upper),
            lower,
            upper,
        }),
        (Some((p, value)), None) | (None, Some((p, value))) => Some(BandReading::Nearest {
            value,
            percentile: p,
        }),
        (None, None) => None,
    }
}

/// `P50`, `P62.5`.
#[must_use]
pub fn percentile_label(percentile: f64) -> String {
    format!("P{percentile}")
}
