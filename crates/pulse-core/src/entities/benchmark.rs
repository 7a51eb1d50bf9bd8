use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::OrgContext;
use crate::enums::{CompanySize, CompensationBasis, SeniorityLevel};

/// Percentiles a benchmark survey publishes bands for.
pub const STANDARD_PERCENTILES: [u8; 5] = [10, 25, 50, 75, 90];

/// Benchmark values at the standard percentiles. Any band may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PercentileBands {
    #[serde(default)]
    pub p10: Option<f64>,
    #[serde(default)]
    pub p25: Option<f64>,
    #[serde(default)]
    pub p50: Option<f64>,
    #[serde(default)]
    pub p75: Option<f64>,
    #[serde(default)]
    pub p90: Option<f64>,
}

impl PercentileBands {
    /// Value at a standard percentile; `None` for non-standard percentiles
    /// and for bands the survey did not publish.
    #[must_use]
    pub const fn get(&self, percentile: u8) -> Option<f64> {
        match percentile {
            10 => self.p10,
            25 => self.p25,
            50 => self.p50,
            75 => self.p75,
            90 => self.p90,
            _ => None,
        }
    }

    pub const fn set(&mut self, percentile: u8, value: Option<f64>) {
        match percentile {
            10 => self.p10 = value,
            25 => self.p25 = value,
            50 => self.p50 = value,
            75 => self.p75 = value,
            90 => self.p90 = value,
            _ => {}
        }
    }

    /// Published `(percentile, value)` pairs in ascending percentile order.
    /// Non-finite values are treated as unpublished.
    #[must_use]
    pub fn available(&self) -> Vec<(f64, f64)> {
        STANDARD_PERCENTILES
            .iter()
            .filter_map(|&p| {
                self.get(p)
                    .filter(|v| v.is_finite())
                    .map(|v| (f64::from(p), v))
            })
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.available().is_empty()
    }
}

/// One row of market benchmark data for a role in a market segment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BenchmarkRow {
    pub role_family: String,
    pub standardized_title: String,
    #[serde(default)]
    pub seniority_level: Option<SeniorityLevel>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub company_size: Option<CompanySize>,
    pub currency: String,
    #[serde(default)]
    pub sample_size: u32,
    /// Survey or provider name, used in provenance strings.
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub total_compensation: PercentileBands,
    #[serde(default)]
    pub base_salary: PercentileBands,
}

impl BenchmarkRow {
    #[must_use]
    pub const fn bands(&self, basis: CompensationBasis) -> &PercentileBands {
        match basis {
            CompensationBasis::TotalCompensation => &self.total_compensation,
            CompensationBasis::BaseSalary => &self.base_salary,
        }
    }

    #[must_use]
    pub fn context(&self) -> OrgContext {
        OrgContext {
            industry: self.industry.clone(),
            region: self.region.clone(),
            company_size: self.company_size,
        }
    }
}
