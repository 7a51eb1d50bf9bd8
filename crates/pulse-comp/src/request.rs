use pulse_config::CompensationConfig;
use pulse_core::entities::{CompensationTarget, OrgContext};
use pulse_core::enums::{CompanySize, CompensationBasis};
use serde::{Deserialize, Serialize};

/// One target calculation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetRequest {
    pub scenario_id: String,
    /// Market context for benchmark selection.
    #[serde(default)]
    pub context: OrgContext,
    /// Overrides `context.company_size` when set.
    #[serde(default)]
    pub company_size: Option<CompanySize>,
    /// Market percentile to target, in (0, 100).
    pub target_percentile: f64,
    #[serde(default)]
    pub basis: CompensationBasis,
    /// Recalculate employees that carry a manual override.
    #[serde(default)]
    pub force: bool,
    /// Previously stored targets; manual ones for this scenario are kept.
    #[serde(default)]
    pub existing: Vec<CompensationTarget>,
}

impl TargetRequest {
    /// A request using the configured percentile and basis.
    #[must_use]
    pub fn from_config(scenario_id: impl Into<String>, config: &CompensationConfig) -> Self {
        Self {
            scenario_id: scenario_id.into(),
            context: OrgContext::default(),
            company_size: None,
            target_percentile: config.target_percentile,
            basis: config.basis,
            force: false,
            existing: Vec::new(),
        }
    }

    /// Selection context with the company-size override applied.
    #[must_use]
    pub fn effective_context(&self) -> OrgContext {
        let mut context = self.context.normalized();
        if self.company_size.is_some() {
            context.company_size = self.company_size;
        }
        context
    }
}

/// An employee no target could be produced for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unavailable {
    pub employee_id: String,
    pub reason: String,
}

/// Result of a calculation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetBatch {
    /// Newly calculated targets, in employee input order.
    pub targets: Vec<CompensationTarget>,
    /// Manual overrides carried through untouched.
    pub preserved: Vec<CompensationTarget>,
    pub unavailable: Vec<Unavailable>,
}
