//! Derived views over the employee set that formulas evaluate against.

use chrono::{Days, NaiveDate};
use pulse_core::entities::{DatasetMetadata, EmployeeRecord};

/// Length of the trailing reporting period for rate KPIs.
pub const PERIOD_DAYS: u64 = 365;

const DAYS_PER_YEAR: f64 = 365.25;

/// Employees and metadata as seen on the reporting date.
#[derive(Debug)]
pub struct Workforce<'a> {
    employees: &'a [EmployeeRecord],
    active: Vec<&'a EmployeeRecord>,
    metadata: &'a DatasetMetadata,
}

impl<'a> Workforce<'a> {
    /// Active means employed on `metadata.as_of`.
    #[must_use]
    pub fn new(employees: &'a [EmployeeRecord], metadata: &'a DatasetMetadata) -> Self {
        let active = employees
            .iter()
            .filter(|e| e.was_employed_on(metadata.as_of))
            .collect();
        Self {
            employees,
            active,
            metadata,
        }
    }

    #[must_use]
    pub fn active(&self) -> &[&'a EmployeeRecord] {
        &self.active
    }

    #[must_use]
    pub const fn metadata(&self) -> &DatasetMetadata {
        self.metadata
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn headcount(&self) -> f64 {
        self.active.len() as f64
    }

    #[must_use]
    pub fn fte_total(&self) -> f64 {
        self.active.iter().map(|e| e.fte).sum()
    }

    /// Total compensation of each active employee.
    #[must_use]
    pub fn compensation(&self) -> Vec<f64> {
        self.active.iter().map(|e| e.total_compensation).collect()
    }

    /// Revenue, when reported as a positive amount. Zero or negative
    /// revenue counts as not reported.
    #[must_use]
    pub fn revenue(&self) -> Option<f64> {
        self.metadata
            .total_revenue
            .filter(|r| r.is_finite() && *r > 0.0)
    }

    /// Years since start for active employees with a known start date.
    #[must_use]
    pub fn tenures(&self) -> Vec<f64> {
        let as_of = self.metadata.as_of;
        self.active
            .iter()
            .filter_map(|e| e.start_date)
            .map(|start| years_between(start, as_of))
            .collect()
    }

    /// First day of the trailing period; the period is `(start, as_of]`.
    #[must_use]
    pub fn period_start(&self) -> NaiveDate {
        self.metadata
            .as_of
            .checked_sub_days(Days::new(PERIOD_DAYS))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Employees whose last day fell inside the period.
    #[must_use]
    pub fn leavers(&self) -> usize {
        let (start, end) = (self.period_start(), self.metadata.as_of);
        self.employees
            .iter()
            .filter(|e| e.end_date.is_some_and(|d| d > start && d <= end))
            .count()
    }

    /// Employees who started inside the period.
    #[must_use]
    pub fn joiners(&self) -> usize {
        let (start, end) = (self.period_start(), self.metadata.as_of);
        self.employees
            .iter()
            .filter(|e| e.start_date.is_some_and(|d| d > start && d <= end))
            .count()
    }

    /// Mean of the headcount at the start and at the end of the period.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_period_headcount(&self) -> f64 {
        let start = self.period_start();
        let at_start = self
            .employees
            .iter()
            .filter(|e| e.was_employed_on(start))
            .count();
        f64::midpoint(at_start as f64, self.headcount())
    }
}

#[allow(clippy::cast_precision_loss)]
fn years_between(from: NaiveDate, to: NaiveDate) -> f64 {
    (to - from).num_days().max(0) as f64 / DAYS_PER_YEAR
}
