use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::OrgContext;
use crate::enums::CompanySize;

/// Aggregate context for one uploaded workforce dataset.
///
/// Amounts are assumed to be pre-normalized into `currency`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DatasetMetadata {
    #[serde(default)]
    pub total_revenue: Option<f64>,
    pub currency: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub company_size: Option<CompanySize>,
    /// Reporting date; period KPIs cover the trailing 365 days up to it.
    pub as_of: NaiveDate,
}

impl DatasetMetadata {
    #[must_use]
    pub fn context(&self) -> OrgContext {
        OrgContext {
            industry: self.industry.clone(),
            region: self.region.clone(),
            company_size: self.company_size,
        }
    }
}
