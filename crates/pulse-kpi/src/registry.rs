//! The static KPI registry.
//!
//! Ids are stable and never reused. Adding a KPI or changing a formula bumps
//! [`REGISTRY_VERSION`].

use pulse_core::entities::{BenchmarkRange, KpiDefinition};
use pulse_core::enums::{KpiCategory, KpiUnit, Polarity};

use crate::workforce::Workforce;

pub const REGISTRY_VERSION: u32 = 1;

/// Formula over a workforce view. `None` when an input is missing or a
/// denominator is zero.
pub type Formula = fn(&Workforce<'_>) -> Option<f64>;

/// One registry entry: definition metadata plus its formula.
#[derive(Debug, Clone, Copy)]
pub struct KpiSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub category: KpiCategory,
    pub unit: KpiUnit,
    pub polarity: Polarity,
    /// Formula in words, copied into [`KpiDefinition::formula`].
    pub formula: &'static str,
    pub description: &'static str,
    /// Default benchmark range used when the caller supplies none.
    pub benchmark: Option<BenchmarkRange>,
    /// Undefined over an empty active workforce.
    pub needs_population: bool,
    pub evaluate: Formula,
}

impl KpiSpec {
    #[must_use]
    pub fn definition(&self) -> KpiDefinition {
        KpiDefinition {
            id: self.id.to_string(),
            name: self.name.to_string(),
            category: self.category,
            formula: self.formula.to_string(),
            unit: self.unit,
            polarity: self.polarity,
            benchmark: self.benchmark,
            description: self.description.to_string(),
        }
    }
}

/// Versioned, immutable set of KPI definitions.
#[derive(Debug, Clone, Copy)]
pub struct KpiRegistry {
    version: u32,
    specs: &'static [KpiSpec],
}

impl KpiRegistry {
    /// The built-in registry.
    #[must_use]
    pub const fn builtin() -> Self {
        Self {
            version: REGISTRY_VERSION,
            specs: SPECS,
        }
    }

    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'static KpiSpec> {
        self.specs.iter().find(|spec| spec.id == id)
    }

    #[must_use]
    pub const fn specs(&self) -> &'static [KpiSpec] {
        self.specs
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> {
        self.specs.iter().map(|spec| spec.id)
    }

    #[must_use]
    pub fn definitions(&self) -> Vec<KpiDefinition> {
        self.specs.iter().map(KpiSpec::definition).collect()
    }
}

impl Default for KpiRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

// ---------------------------------------------------------------------------
// Definitions
// ---------------------------------------------------------------------------

const HIGHER: Polarity = Polarity::HigherIsBetter;
const LOWER: Polarity = Polarity::LowerIsBetter;

static SPECS: &[KpiSpec] = &[
    // Workforce
    KpiSpec {
        id: "headcount",
        name: "Headcount",
        category: KpiCategory::Workforce,
        unit: KpiUnit::Count,
        polarity: HIGHER,
        formula: "count(active employees)",
        description: "Employees active on the reporting date.",
        benchmark: None,
        needs_population: false,
        evaluate: |w| Some(w.headcount()),
    },
    KpiSpec {
        id: "fte_total",
        name: "Total FTE",
        category: KpiCategory::Workforce,
        unit: KpiUnit::Count,
        polarity: HIGHER,
        formula: "sum(fte of active employees)",
        description: "Full-time equivalents on the reporting date.",
        benchmark: None,
        needs_population: false,
        evaluate: |w| Some(w.fte_total()),
    },
    KpiSpec {
        id: "average_tenure_years",
        name: "Average tenure",
        category: KpiCategory::Workforce,
        unit: KpiUnit::Years,
        polarity: HIGHER,
        formula: "mean(years since start date of active employees)",
        description: "Mean tenure of active employees with a known start date.",
        benchmark: Some(BenchmarkRange::new(1.5, 3.0, 5.0)),
        needs_population: true,
        evaluate: |w| {
            let tenures = w.tenures();
            (!tenures.is_empty()).then(|| pulse_stats::average(&tenures))
        },
    },
    KpiSpec {
        id: "contractor_ratio",
        name: "Contractor ratio",
        category: KpiCategory::Workforce,
        unit: KpiUnit::Percent,
        polarity: LOWER,
        formula: "count(contractor or temporary) / headcount * 100",
        description: "Share of the active workforce on contingent contracts.",
        benchmark: Some(BenchmarkRange::new(5.0, 12.0, 25.0)),
        needs_population: false,
        evaluate: |w| {
            let contingent = count(w, |e| e.employment_type.is_contingent());
            percent(contingent, w.headcount())
        },
    },
    KpiSpec {
        id: "management_ratio",
        name: "Management ratio",
        category: KpiCategory::Workforce,
        unit: KpiUnit::Percent,
        polarity: LOWER,
        formula: "count(manager level or above) / headcount * 100",
        description: "Share of the active workforce in management roles.",
        benchmark: Some(BenchmarkRange::new(8.0, 14.0, 22.0)),
        needs_population: false,
        evaluate: |w| {
            let managers = count(w, |e| e.seniority().is_some_and(|s| s.is_management()));
            percent(managers, w.headcount())
        },
    },
    // Compensation
    KpiSpec {
        id: "total_compensation_cost",
        name: "Total compensation cost",
        category: KpiCategory::Compensation,
        unit: KpiUnit::Currency,
        polarity: LOWER,
        formula: "sum(total compensation of active employees)",
        description: "Annual compensation spend for the active workforce.",
        benchmark: None,
        needs_population: false,
        evaluate: |w| Some(pulse_stats::sum(&w.compensation())),
    },
    KpiSpec {
        id: "average_compensation",
        name: "Average compensation",
        category: KpiCategory::Compensation,
        unit: KpiUnit::Currency,
        polarity: HIGHER,
        formula: "mean(total compensation of active employees)",
        description: "Mean total compensation.",
        benchmark: None,
        needs_population: true,
        evaluate: |w| Some(pulse_stats::average(&w.compensation())),
    },
    KpiSpec {
        id: "median_compensation",
        name: "Median compensation",
        category: KpiCategory::Compensation,
        unit: KpiUnit::Currency,
        polarity: HIGHER,
        formula: "median(total compensation of active employees)",
        description: "Median total compensation.",
        benchmark: None,
        needs_population: true,
        evaluate: |w| Some(pulse_stats::median(&w.compensation())),
    },
    KpiSpec {
        id: "compensation_dispersion",
        name: "Compensation dispersion",
        category: KpiCategory::Compensation,
        unit: KpiUnit::Percent,
        polarity: LOWER,
        formula: "stddev(total compensation) / mean(total compensation) * 100",
        description: "Coefficient of variation of total compensation.",
        benchmark: Some(BenchmarkRange::new(20.0, 35.0, 60.0)),
        needs_population: true,
        evaluate: |w| {
            let comp = w.compensation();
            percent(
                pulse_stats::standard_deviation(&comp),
                pulse_stats::average(&comp),
            )
        },
    },
    KpiSpec {
        id: "bonus_share",
        name: "Bonus share",
        category: KpiCategory::Compensation,
        unit: KpiUnit::Percent,
        polarity: HIGHER,
        formula: "sum(bonus) / sum(total compensation) * 100",
        description: "Variable pay as a share of total compensation.",
        benchmark: Some(BenchmarkRange::new(3.0, 8.0, 15.0)),
        needs_population: false,
        evaluate: |w| {
            let bonus: f64 = w.active().iter().filter_map(|e| e.bonus).sum();
            percent(bonus, pulse_stats::sum(&w.compensation()))
        },
    },
    // Productivity
    KpiSpec {
        id: "revenue_per_employee",
        name: "Revenue per employee",
        category: KpiCategory::Productivity,
        unit: KpiUnit::Currency,
        polarity: HIGHER,
        formula: "total revenue / headcount",
        description: "Annual revenue per active employee.",
        benchmark: Some(BenchmarkRange::new(100_000.0, 200_000.0, 400_000.0)),
        needs_population: false,
        evaluate: |w| divide(w.revenue()?, w.headcount()),
    },
    KpiSpec {
        id: "revenue_per_fte",
        name: "Revenue per FTE",
        category: KpiCategory::Productivity,
        unit: KpiUnit::Currency,
        polarity: HIGHER,
        formula: "total revenue / sum(fte)",
        description: "Annual revenue per full-time equivalent.",
        benchmark: Some(BenchmarkRange::new(100_000.0, 200_000.0, 400_000.0)),
        needs_population: false,
        evaluate: |w| divide(w.revenue()?, w.fte_total()),
    },
    KpiSpec {
        id: "compensation_to_revenue",
        name: "Compensation to revenue",
        category: KpiCategory::Productivity,
        unit: KpiUnit::Percent,
        polarity: LOWER,
        formula: "sum(total compensation) / total revenue * 100",
        description: "Compensation spend as a share of revenue.",
        benchmark: Some(BenchmarkRange::new(20.0, 35.0, 50.0)),
        needs_population: false,
        evaluate: |w| percent(pulse_stats::sum(&w.compensation()), w.revenue()?),
    },
    // Retention
    KpiSpec {
        id: "turnover_rate",
        name: "Turnover rate",
        category: KpiCategory::Retention,
        unit: KpiUnit::Percent,
        polarity: LOWER,
        formula: "leavers in trailing 365 days / mean(headcount at period start, headcount now) * 100",
        description: "Annual employee turnover.",
        benchmark: Some(BenchmarkRange::new(5.0, 12.0, 25.0)),
        needs_population: false,
        evaluate: |w| rate(w.leavers(), w.average_period_headcount()),
    },
    KpiSpec {
        id: "new_hire_rate",
        name: "New hire rate",
        category: KpiCategory::Retention,
        unit: KpiUnit::Percent,
        polarity: HIGHER,
        formula: "joiners in trailing 365 days / mean(headcount at period start, headcount now) * 100",
        description: "Annual hiring relative to the workforce.",
        benchmark: Some(BenchmarkRange::new(5.0, 15.0, 30.0)),
        needs_population: false,
        evaluate: |w| rate(w.joiners(), w.average_period_headcount()),
    },
];

#[allow(clippy::cast_precision_loss)]
fn count(w: &Workforce<'_>, pred: impl Fn(&pulse_core::entities::EmployeeRecord) -> bool) -> f64 {
    w.active().iter().filter(|&&e| pred(e)).count() as f64
}

#[allow(clippy::cast_precision_loss)]
fn rate(events: usize, average_headcount: f64) -> Option<f64> {
    percent(events as f64, average_headcount)
}

fn divide(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 || !denominator.is_finite() {
        return None;
    }
    Some(numerator / denominator).filter(|v| v.is_finite())
}

fn percent(numerator: f64, denominator: f64) -> Option<f64> {
    divide(numerator, denominator).map(|v| v * 100.0)
}
