use std::collections::BTreeMap;

use chrono::{NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;
use pulse_config::CategoryWeights;
use pulse_core::entities::{BenchmarkRange, DatasetMetadata, EmployeeRecord, KpiValue};
use pulse_core::enums::{EmploymentType, Grade, KpiCategory};
use pulse_health::{HealthError, aggregate, aggregate_at, cost_signal};
use pulse_kpi::{KpiEngine, KpiRegistry};

fn kpi(id: &str, value: Option<f64>) -> KpiValue {
    let spec = KpiRegistry::builtin().get(id).expect("registry id");
    KpiValue {
        kpi_id: id.to_string(),
        value,
        definition: spec.definition(),
        error: None,
    }
}

fn no_overrides() -> BTreeMap<String, BenchmarkRange> {
    BTreeMap::new()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn values_at_median_score_fifty() {
    // Registry defaults: tenure median 3.0, turnover median 12.0.
    let values = vec![
        kpi("average_tenure_years", Some(3.0)),
        kpi("turnover_rate", Some(12.0)),
    ];
    let snapshot = aggregate(&values, &no_overrides(), &CategoryWeights::default(), None).unwrap();
    assert!(close(snapshot.kpi_scores["average_tenure_years"], 50.0));
    assert!(close(snapshot.kpi_scores["turnover_rate"], 50.0));
    assert!(close(snapshot.composite_score, 50.0));
    assert_eq!(snapshot.grade, Grade::F);
    assert_eq!(snapshot.trend, None);
    assert_eq!(snapshot.cost_signal, None);
}

#[test]
fn null_category_is_dropped_and_weights_renormalize() {
    let values = vec![
        kpi("average_tenure_years", Some(5.0)),  // workforce: 100
        kpi("bonus_share", Some(3.0)),           // compensation: 0
        kpi("revenue_per_employee", None),       // productivity: excluded
        kpi("headcount", Some(40.0)),            // no range: excluded
    ];
    let weights = CategoryWeights {
        workforce: 0.3,
        compensation: 0.1,
        productivity: 0.4,
        retention: 0.2,
    };
    let snapshot = aggregate(&values, &no_overrides(), &weights, None).unwrap();

    let categories: Vec<KpiCategory> = snapshot.category_scores.keys().copied().collect();
    assert_eq!(categories, vec![KpiCategory::Workforce, KpiCategory::Compensation]);
    let weight_sum: f64 = snapshot.effective_weights.values().sum();
    assert!(close(weight_sum, 1.0));
    assert!(close(snapshot.effective_weights[&KpiCategory::Workforce], 0.75));
    assert!(close(snapshot.composite_score, 75.0));
    assert_eq!(snapshot.grade, Grade::C);
    assert!(!snapshot.kpi_scores.contains_key("headcount"));
}

#[test]
fn category_score_is_mean_of_its_kpis() {
    let values = vec![
        kpi("turnover_rate", Some(5.0)),  // lower is better, at low: 100
        kpi("new_hire_rate", Some(5.0)),  // higher is better, at low: 0
    ];
    let snapshot = aggregate(&values, &no_overrides(), &CategoryWeights::default(), None).unwrap();
    assert!(close(snapshot.category_scores[&KpiCategory::Retention], 50.0));
}

#[test]
fn caller_ranges_override_registry_defaults() {
    let values = vec![kpi("headcount", Some(150.0))];
    let mut ranges = BTreeMap::new();
    ranges.insert("headcount".to_string(), BenchmarkRange::new(50.0, 100.0, 200.0));
    let snapshot = aggregate(&values, &ranges, &CategoryWeights::default(), None).unwrap();
    assert!(close(snapshot.composite_score, 75.0));
}

#[test]
fn trend_is_delta_to_previous_snapshot() {
    let at = Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap();
    let weights = CategoryWeights::default();
    let before = aggregate_at(&[kpi("turnover_rate", Some(12.0))], &no_overrides(), &weights, None, at).unwrap();
    let after = aggregate_at(
        &[kpi("turnover_rate", Some(5.0))],
        &no_overrides(),
        &weights,
        Some(&before),
        at,
    )
    .unwrap();
    assert_eq!(after.calculated_at, at);
    assert!(close(after.trend.unwrap(), 50.0));
}

#[test]
fn nothing_scorable_is_an_error() {
    let values = vec![kpi("headcount", Some(10.0)), kpi("turnover_rate", None)];
    let err = aggregate(&values, &no_overrides(), &CategoryWeights::default(), None).unwrap_err();
    assert!(matches!(err, HealthError::NoScorableCategories));

    let only_zero_weight = CategoryWeights {
        retention: 0.0,
        ..CategoryWeights::default()
    };
    let err = aggregate(
        &[kpi("turnover_rate", Some(10.0))],
        &no_overrides(),
        &only_zero_weight,
        None,
    )
    .unwrap_err();
    assert!(matches!(err, HealthError::NoScorableCategories));
}

#[test]
fn negative_weight_is_rejected() {
    let weights = CategoryWeights {
        productivity: -0.5,
        ..CategoryWeights::default()
    };
    let err = aggregate(&[kpi("turnover_rate", Some(10.0))], &no_overrides(), &weights, None).unwrap_err();
    assert!(matches!(
        err,
        HealthError::InvalidWeight { category: KpiCategory::Productivity, .. }
    ));
}

#[test]
fn scores_kpi_engine_output() {
    let as_of = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
    let employees: Vec<EmployeeRecord> = (0..4)
        .map(|i| EmployeeRecord {
            id: format!("e{i}"),
            department: None,
            role: "Software Engineer".into(),
            standardized_role: None,
            level: None,
            employment_type: EmploymentType::FullTime,
            fte: 1.0,
            base_salary: None,
            bonus: Some(5_000.0),
            equity: None,
            total_compensation: 100_000.0 + f64::from(i) * 10_000.0,
            location: None,
            start_date: NaiveDate::from_ymd_opt(2021, 1, 1),
            end_date: None,
        })
        .collect();
    let metadata = DatasetMetadata {
        total_revenue: Some(1_200_000.0),
        currency: "USD".into(),
        industry: None,
        region: None,
        company_size: None,
        as_of,
    };

    let batch = KpiEngine::default().calculate_all(&employees, &metadata);
    let mut snapshot =
        aggregate(&batch.values, &no_overrides(), &CategoryWeights::default(), None).unwrap();
    snapshot.cost_signal = cost_signal(&[400_000.0, 410_000.0, 405_000.0, 460_000.0]);

    assert_eq!(snapshot.category_scores.len(), 4);
    assert!((0.0..=100.0).contains(&snapshot.composite_score));
    assert!(snapshot.cost_signal.is_some_and(|s| s.z_score > 0.0));
}

#[test]
fn empty_workforce_still_scores_what_it_can() {
    let metadata = DatasetMetadata {
        total_revenue: Some(1_200_000.0),
        currency: "USD".into(),
        industry: None,
        region: None,
        company_size: None,
        as_of: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
    };

    let batch = KpiEngine::default().calculate_all(&[], &metadata);
    assert!(batch.values.iter().any(|v| v.error.is_some()));

    let snapshot = aggregate(&batch.values, &no_overrides(), &CategoryWeights::default(), None).unwrap();
    let categories: Vec<KpiCategory> = snapshot.category_scores.keys().copied().collect();
    assert_eq!(categories, vec![KpiCategory::Productivity]);
    assert!(!snapshot.kpi_scores.contains_key("average_compensation"));
}
