use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{EmploymentType, SeniorityLevel};
use crate::errors::CoreError;

const fn default_fte() -> f64 {
    1.0
}

/// One worker as supplied by the caller.
///
/// `end_date == None` means the employee is active. `total_compensation` is
/// always present, even when the individual components are not.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EmployeeRecord {
    pub id: String,
    #[serde(default)]
    pub department: Option<String>,
    /// Free-text job title as entered by the customer.
    pub role: String,
    /// Canonical title, when already resolved upstream.
    #[serde(default)]
    pub standardized_role: Option<String>,
    /// Free-text level/seniority (e.g. `"Sr."`, `"L5"`, `"Director"`).
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub employment_type: EmploymentType,
    /// Full-time-equivalent factor in (0, 1].
    #[serde(default = "default_fte")]
    pub fte: f64,
    #[serde(default)]
    pub base_salary: Option<f64>,
    #[serde(default)]
    pub bonus: Option<f64>,
    #[serde(default)]
    pub equity: Option<f64>,
    pub total_compensation: f64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl EmployeeRecord {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.end_date.is_none()
    }

    /// Whether the employee was on the books at the end of `date`.
    #[must_use]
    pub fn was_employed_on(&self, date: NaiveDate) -> bool {
        let started = self.start_date.is_none_or(|start| start <= date);
        let not_left = self.end_date.is_none_or(|end| end > date);
        started && not_left
    }

    /// Seniority parsed from the explicit level, falling back to the title.
    #[must_use]
    pub fn seniority(&self) -> Option<SeniorityLevel> {
        self.level
            .as_deref()
            .and_then(SeniorityLevel::parse)
            .or_else(|| SeniorityLevel::parse(&self.role))
    }

    /// Title to feed the role matcher: the resolved title when present.
    #[must_use]
    pub fn title_for_matching(&self) -> &str {
        self.standardized_role
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.role)
    }

    /// Check the record's structural invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] when the FTE factor is outside
    /// (0, 1], compensation is negative or non-finite, or the end date
    /// precedes the start date.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(self.fte > 0.0 && self.fte <= 1.0) {
            return Err(CoreError::InvalidInput(format!(
                "employee {}: fte {} outside (0, 1]",
                self.id, self.fte
            )));
        }
        if !self.total_compensation.is_finite() || self.total_compensation < 0.0 {
            return Err(CoreError::InvalidInput(format!(
                "employee {}: total compensation {} is not a non-negative amount",
                self.id, self.total_compensation
            )));
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                return Err(CoreError::InvalidInput(format!(
                    "employee {}: end date {end} precedes start date {start}",
                    self.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> EmployeeRecord {
        EmployeeRecord {
            id: "e-1".into(),
            department: Some("Engineering".into()),
            role: "Sr. Software Engineer".into(),
            standardized_role: None,
            level: None,
            employment_type: EmploymentType::FullTime,
            fte: 1.0,
            base_salary: Some(150_000.0),
            bonus: Some(15_000.0),
            equity: None,
            total_compensation: 165_000.0,
            location: None,
            start_date: NaiveDate::from_ymd_opt(2021, 3, 1),
            end_date: None,
        }
    }

    #[test]
    fn active_iff_no_end_date() {
        let mut e = record();
        assert!(e.is_active());
        e.end_date = NaiveDate::from_ymd_opt(2024, 1, 31);
        assert!(!e.is_active());
    }

    #[test]
    fn employment_window_is_start_inclusive_end_exclusive() {
        let mut e = record();
        e.end_date = NaiveDate::from_ymd_opt(2024, 1, 31);
        assert!(e.was_employed_on(NaiveDate::from_ymd_opt(2021, 3, 1).unwrap()));
        assert!(e.was_employed_on(NaiveDate::from_ymd_opt(2024, 1, 30).unwrap()));
        assert!(!e.was_employed_on(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
        assert!(!e.was_employed_on(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()));
    }

    #[test]
    fn seniority_falls_back_to_title() {
        let mut e = record();
        assert_eq!(e.seniority(), Some(SeniorityLevel::Senior));
        e.level = Some("Director".into());
        assert_eq!(e.seniority(), Some(SeniorityLevel::Director));
    }

    #[test]
    fn resolved_title_preferred_for_matching() {
        let mut e = record();
        assert_eq!(e.title_for_matching(), "Sr. Software Engineer");
        e.standardized_role = Some("Senior Software Engineer".into());
        assert_eq!(e.title_for_matching(), "Senior Software Engineer");
        e.standardized_role = Some("   ".into());
        assert_eq!(e.title_for_matching(), "Sr. Software Engineer");
    }

    #[test]
    fn validate_rejects_bad_fte_and_dates() {
        let mut e = record();
        assert!(e.validate().is_ok());
        e.fte = 0.0;
        assert!(matches!(e.validate(), Err(CoreError::InvalidInput(_))));
        e.fte = 0.5;
        e.end_date = NaiveDate::from_ymd_opt(2020, 1, 1);
        assert!(matches!(e.validate(), Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn fte_defaults_to_full_time() {
        let json = r#"{"id":"e-2","role":"CEO","total_compensation":1.0}"#;
        let e: EmployeeRecord = serde_json::from_str(json).unwrap();
        assert!((e.fte - 1.0).abs() < f64::EPSILON);
        assert_eq!(e.employment_type, EmploymentType::FullTime);
    }
}
