use std::collections::HashMap;

use pulse_bench::{BenchmarkRole, BenchmarkSelection, BenchmarkSelector};
use pulse_config::CompensationConfig;
use pulse_core::entities::{
    BenchmarkRow, CompensationTarget, EmployeeRecord, OrgContext, RoleMatch,
};
use pulse_core::enums::{CalculationMethod, SeniorityLevel};
use pulse_match::{MappingStore, RoleMatcher};

use crate::band::{BandReading, percentile_label, read_percentile};
use crate::error::CompError;
use crate::request::{TargetBatch, TargetRequest, Unavailable};

/// Orchestrates title matching, benchmark selection and band reading into
/// per-employee targets.
#[derive(Debug)]
pub struct CompensationTargetCalculator<'m, S> {
    matcher: &'m RoleMatcher<S>,
    selector: BenchmarkSelector,
    prorate_by_fte: bool,
}

impl<'m, S: MappingStore> CompensationTargetCalculator<'m, S> {
    #[must_use]
    pub const fn new(
        matcher: &'m RoleMatcher<S>,
        selector: BenchmarkSelector,
        config: &CompensationConfig,
    ) -> Self {
        Self {
            matcher,
            selector,
            prorate_by_fte: config.prorate_by_fte,
        }
    }

    /// Calculate targets for every employee not protected by a manual
    /// override.
    ///
    /// Output is a pure function of the inputs and the mapping library's
    /// contents: no timestamps, input order preserved. Employees that cannot
    /// be given a target are listed in [`TargetBatch::unavailable`] and do not
    /// stop the rest of the batch.
    ///
    /// # Errors
    ///
    /// Returns [`CompError::InvalidPercentile`] if the requested percentile
    /// is outside (0, 100).
    pub fn calculate(
        &self,
        employees: &[EmployeeRecord],
        benchmarks: &[BenchmarkRow],
        request: &TargetRequest,
    ) -> Result<TargetBatch, CompError> {
        let percentile = request.target_percentile;
        if !(percentile > 0.0 && percentile < 100.0) {
            return Err(CompError::InvalidPercentile(percentile));
        }

        let context = request.effective_context();
        let overrides: HashMap<&str, &CompensationTarget> = request
            .existing
            .iter()
            .filter(|t| t.is_manual_override && t.scenario_id == request.scenario_id)
            .map(|t| (t.employee_id.as_str(), t))
            .collect();

        let titles: Vec<&str> = employees.iter().map(EmployeeRecord::title_for_matching).collect();
        let matches = self.matcher.match_batch(&titles, Some(&context));

        let mut batch = TargetBatch::default();
        for employee in employees {
            if !request.force {
                if let Some(manual) = overrides.get(employee.id.as_str()) {
                    tracing::debug!(employee = %employee.id, "comp: keeping manual override");
                    batch.preserved.push((*manual).clone());
                    continue;
                }
            }

            let outcome = employee
                .validate()
                .map_err(|err| err.to_string())
                .and_then(|()| {
                    let title = employee.title_for_matching();
                    let matched = matches
                        .get(title)
                        .ok_or_else(|| "employee has no role title".to_string())?;
                    self.target_for(employee, matched, benchmarks, &context, request)
                });

            match outcome {
                Ok(target) => batch.targets.push(target),
                Err(reason) => {
                    tracing::warn!(employee = %employee.id, %reason, "comp: target unavailable");
                    batch.unavailable.push(Unavailable {
                        employee_id: employee.id.clone(),
                        reason,
                    });
                }
            }
        }

        tracing::info!(
            scenario = %request.scenario_id,
            calculated = batch.targets.len(),
            preserved = batch.preserved.len(),
            unavailable = batch.unavailable.len(),
            "comp: targets calculated"
        );
        Ok(batch)
    }

    #[allow(clippy::float_cmp)]
    fn target_for(
        &self,
        employee: &EmployeeRecord,
        matched: &RoleMatch,
        benchmarks: &[BenchmarkRow],
        context: &OrgContext,
        request: &TargetRequest,
    ) -> Result<CompensationTarget, String> {
        let Some(mut role) = BenchmarkRole::from_match(matched) else {
            return Err(format!(
                "role {:?} needs manual mapping",
                matched.input_title
            ));
        };
        // An explicit level on the record beats the one implied by the title.
        role.seniority_level = employee
            .level
            .as_deref()
            .and_then(SeniorityLevel::parse)
            .or(role.seniority_level);

        let percentile = request.target_percentile;
        let basis = request.basis;

        let direct = self
            .selector
            .select(&role, context, benchmarks)
            .and_then(|selection| {
                read_percentile(selection.row.bands(basis), percentile)
                    .map(|reading| (selection, reading))
            });

        let (selection, reading, method) = if let Some((selection, reading)) = direct {
            let method = if reading.is_published() {
                CalculationMethod::BenchmarkMatch
            } else {
                CalculationMethod::Interpolated
            };
            (selection, reading, method)
        } else {
            let fallback = self
                .selector
                .family_average(&role.role_family, context, benchmarks)
                .and_then(|selection| {
                    read_percentile(selection.row.bands(basis), percentile)
                        .map(|reading| (selection, reading))
                });
            let Some((selection, reading)) = fallback else {
                return Err(format!(
                    "no {} benchmark bands for {} in role family {}",
                    basis.as_str(),
                    role.standardized_title,
                    role.role_family
                ));
            };
            (selection, reading, CalculationMethod::FallbackIndustryAvg)
        };

        let market = reading.value();
        let fte = if self.prorate_by_fte { employee.fte } else { 1.0 };
        let target = market * fte;
        let current = employee.total_compensation;

        Ok(CompensationTarget {
            employee_id: employee.id.clone(),
            scenario_id: request.scenario_id.clone(),
            target_annual_compensation: target,
            calculation_method: method,
            benchmark_source: selection.source.clone(),
            explanation: explain(&role, matched, &selection, &reading, method, percentile, fte),
            is_manual_override: false,
            current_compensation: Some(current),
            compa_ratio: (target != 0.0).then(|| current / target),
            match_confidence: Some(matched.confidence),
        })
    }
}

/// A target set by hand. Unforced recalculations never replace it.
///
/// # Errors
///
/// Returns [`CompError::InvalidAmount`] for a negative or non-finite amount.
pub fn manual_override(
    employee_id: impl Into<String>,
    scenario_id: impl Into<String>,
    amount: f64,
    reason: &str,
) -> Result<CompensationTarget, CompError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(CompError::InvalidAmount(amount));
    }
    let reason = reason.trim();
    Ok(CompensationTarget {
        employee_id: employee_id.into(),
        scenario_id: scenario_id.into(),
        target_annual_compensation: amount,
        calculation_method: CalculationMethod::Manual,
        benchmark_source: "manual".to_string(),
        explanation: if reason.is_empty() {
            "Set manually.".to_string()
        } else {
            format!("Set manually: {reason}")
        },
        is_manual_override: true,
        current_compensation: None,
        compa_ratio: None,
        match_confidence: None,
    })
}

#[allow(clippy::float_cmp)]
fn explain(
    role: &BenchmarkRole,
    matched: &RoleMatch,
    selection: &BenchmarkSelection,
    reading: &BandReading,
    method: CalculationMethod,
    percentile: f64,
    fte: f64,
) -> String {
    let seniority = role
        .seniority_level
        .map_or_else(String::new, |level| format!(" ({level})"));
    let mut text = format!(
        "{} of {} for {}{}: {:.0} {}",
        percentile_label(percentile),
        selection.source,
        role.standardized_title,
        seniority,
        reading.value(),
        selection.row.currency,
    );
    if !reading.is_published() {
        text.push_str(&format!("; {}", reading.describe()));
    }
    if method == CalculationMethod::FallbackIndustryAvg {
        text.push_str("; averaged across the role family");
    }
    if fte != 1.0 {
        text.push_str(&format!("; prorated to {fte} FTE"));
    }
    text.push_str(&format!(
        "; title {:?} matched by {} ({:.2})",
        matched.input_title, matched.match_type, matched.confidence
    ));
    text
}
