use std::collections::HashSet;

use pulse_core::entities::{DatasetMetadata, EmployeeRecord, KpiValue};
use serde::{Deserialize, Serialize};

use crate::error::KpiError;
use crate::registry::{KpiRegistry, KpiSpec};
use crate::workforce::Workforce;

/// Evaluates registry KPIs over an employee set.
#[derive(Debug, Clone, Copy, Default)]
pub struct KpiEngine {
    registry: KpiRegistry,
}

impl KpiEngine {
    #[must_use]
    pub const fn new(registry: KpiRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub const fn registry(&self) -> &KpiRegistry {
        &self.registry
    }

    /// Evaluate the requested KPIs, in request order, once per id.
    ///
    /// Ids are checked before anything is evaluated. Records that fail
    /// validation are left out of the workforce and listed in
    /// [`KpiBatch::rejected`]. Every requested KPI gets a [`KpiValue`]: its
    /// value is `None` when its inputs are insufficient (no revenue, zero
    /// denominator), never `NaN`, and a KPI that cannot be evaluated at all
    /// carries the reason in `error` without affecting the others.
    ///
    /// # Errors
    ///
    /// [`KpiError::UnknownKpi`] for an id not in the registry.
    pub fn calculate<S: AsRef<str>>(
        &self,
        employees: &[EmployeeRecord],
        metadata: &DatasetMetadata,
        kpi_ids: &[S],
    ) -> Result<KpiBatch, KpiError> {
        let mut seen = HashSet::new();
        let mut specs: Vec<&KpiSpec> = Vec::with_capacity(kpi_ids.len());
        for id in kpi_ids {
            let id = id.as_ref();
            let spec = self
                .registry
                .get(id)
                .ok_or_else(|| KpiError::UnknownKpi(id.to_string()))?;
            if seen.insert(spec.id) {
                specs.push(spec);
            }
        }
        Ok(self.evaluate(employees, metadata, &specs))
    }

    /// Evaluate every registry KPI.
    #[must_use]
    pub fn calculate_all(&self, employees: &[EmployeeRecord], metadata: &DatasetMetadata) -> KpiBatch {
        let specs: Vec<&KpiSpec> = self.registry.specs().iter().collect();
        self.evaluate(employees, metadata, &specs)
    }

    fn evaluate(
        &self,
        employees: &[EmployeeRecord],
        metadata: &DatasetMetadata,
        specs: &[&KpiSpec],
    ) -> KpiBatch {
        let mut valid = Vec::with_capacity(employees.len());
        let mut rejected = Vec::new();
        for employee in employees {
            match employee.validate() {
                Ok(()) => valid.push(employee.clone()),
                Err(error) => {
                    tracing::warn!(employee = %employee.id, %error, "kpi: record excluded");
                    rejected.push(RejectedRecord {
                        employee_id: employee.id.clone(),
                        reason: error.to_string(),
                    });
                }
            }
        }

        let workforce = Workforce::new(&valid, metadata);
        let empty = workforce.active().is_empty();

        let values: Vec<KpiValue> = specs
            .iter()
            .map(|spec| {
                if empty && spec.needs_population {
                    let error = KpiError::EmptyWorkforce {
                        kpi_id: spec.id.to_string(),
                    };
                    tracing::warn!(kpi = spec.id, %error, "kpi: not evaluated");
                    return KpiValue {
                        kpi_id: spec.id.to_string(),
                        value: None,
                        definition: spec.definition(),
                        error: Some(error.to_string()),
                    };
                }
                let value = (spec.evaluate)(&workforce).filter(|v| v.is_finite());
                tracing::debug!(kpi = spec.id, ?value, "kpi: evaluated");
                KpiValue {
                    kpi_id: spec.id.to_string(),
                    value,
                    definition: spec.definition(),
                    error: None,
                }
            })
            .collect();

        tracing::info!(
            registry = self.registry.version(),
            employees = employees.len(),
            rejected = rejected.len(),
            active = workforce.active().len(),
            kpis = values.len(),
            "kpi: calculation complete"
        );
        KpiBatch { values, rejected }
    }
}

/// An employee record left out of a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRecord {
    pub employee_id: String,
    pub reason: String,
}

/// Result of a KPI calculation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiBatch {
    /// One value per requested KPI, in request order.
    pub values: Vec<KpiValue>,
    pub rejected: Vec<RejectedRecord>,
}

impl KpiBatch {
    #[must_use]
    pub fn get(&self, kpi_id: &str) -> Option<&KpiValue> {
        self.values.iter().find(|v| v.kpi_id == kpi_id)
    }
}
