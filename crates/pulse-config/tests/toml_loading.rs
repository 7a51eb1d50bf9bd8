//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pulse_config::{ConfigError, PulseConfig};
use pulse_core::enums::CompensationBasis;

#[test]
fn loads_matcher_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[matcher]
fuzzy_threshold = 0.7
report_margin = 4
"#,
        )?;

        let config: PulseConfig = Figment::from(Serialized::defaults(PulseConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!((config.matcher.fuzzy_threshold - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.matcher.report_margin, 4);
        // Untouched fields keep their defaults.
        assert!((config.matcher.taxonomy_confidence - 0.95).abs() < f64::EPSILON);
        Ok(())
    });
}

#[test]
fn loads_compensation_and_weights_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[compensation]
target_percentile = 65.0
basis = "base_salary"
prorate_by_fte = false

[health.weights]
retention = 0.4
productivity = 0.1
"#,
        )?;

        let config: PulseConfig = Figment::from(Serialized::defaults(PulseConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!((config.compensation.target_percentile - 65.0).abs() < f64::EPSILON);
        assert_eq!(config.compensation.basis, CompensationBasis::BaseSalary);
        assert!(!config.compensation.prorate_by_fte);
        assert!((config.health.weights.retention - 0.4).abs() < f64::EPSILON);
        assert!((config.health.weights.workforce - 0.25).abs() < f64::EPSILON);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[matcher]
fuzzy_threshold = 0.7
"#,
        )?;
        jail.set_env("PULSE_MATCHER__FUZZY_THRESHOLD", "0.9");
        jail.set_env("PULSE_BENCHMARK__MIN_SAMPLE_SIZE", "25");

        let config: PulseConfig = Figment::from(Serialized::defaults(PulseConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("PULSE_").split("__"))
            .extract()?;

        assert!((config.matcher.fuzzy_threshold - 0.9).abs() < f64::EPSILON);
        assert_eq!(config.benchmark.min_sample_size, 25);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".pulse")?;
        jail.create_file(
            ".pulse/config.toml",
            r#"
[general]
log_filter = "pulse_match=debug"
"#,
        )?;

        let config = PulseConfig::load().expect("config loads");
        assert_eq!(config.general.log_filter, "pulse_match=debug");
        Ok(())
    });
}

#[test]
fn out_of_range_values_fail_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("PULSE_COMPENSATION__TARGET_PERCENTILE", "100");

        let result = PulseConfig::from_figment(&PulseConfig::figment());
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "compensation.target_percentile"
        ));
        Ok(())
    });
}
