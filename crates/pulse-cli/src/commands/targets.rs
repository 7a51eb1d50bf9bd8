use pulse_bench::BenchmarkSelector;
use pulse_comp::{CompensationTargetCalculator, TargetBatch, TargetRequest};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TargetsArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pulse targets`.
pub fn handle(args: &TargetsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let batch = run(args, ctx)?;
    output(&batch, flags.format)
}

pub fn run(args: &TargetsArgs, ctx: &AppContext) -> anyhow::Result<TargetBatch> {
    if ctx.bundle.employees.is_empty() {
        anyhow::bail!("targets: the bundle has no employees");
    }

    let mut request = TargetRequest::from_config(&args.scenario, &ctx.config.compensation);
    if let Some(percentile) = args.percentile {
        request.target_percentile = percentile;
    }
    request.force = args.force;
    request.context = ctx.bundle.context().unwrap_or_default();
    request.existing.clone_from(&ctx.bundle.existing_targets);

    let matcher = ctx.matcher();
    let selector = BenchmarkSelector::new(ctx.config.benchmark.clone());
    let calculator = CompensationTargetCalculator::new(&matcher, selector, &ctx.config.compensation);
    Ok(calculator.calculate(&ctx.bundle.employees, &ctx.bundle.benchmarks, &request)?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use pulse_core::enums::CalculationMethod;

    use super::*;
    use crate::commands::fixtures;

    fn args(percentile: Option<f64>, force: bool) -> TargetsArgs {
        TargetsArgs {
            scenario: "default".to_string(),
            percentile,
            force,
        }
    }

    fn target_of(batch: &TargetBatch, id: &str) -> f64 {
        batch
            .targets
            .iter()
            .find(|t| t.employee_id == id)
            .map(|t| t.target_annual_compensation)
            .expect("employee should have a target")
    }

    #[test]
    fn median_targets_from_bundle_benchmarks() {
        let ctx = fixtures::context();
        let batch = run(&args(None, false), &ctx).expect("targets should run");

        assert!(batch.unavailable.is_empty());
        assert_eq!(target_of(&batch, "e1"), 125_000.0);
        assert_eq!(target_of(&batch, "e2"), 165_000.0);
        // Library maps "Code Ninja" to Software Engineer; half-time.
        assert_eq!(target_of(&batch, "e3"), 62_500.0);
        assert!(
            batch
                .targets
                .iter()
                .all(|t| t.calculation_method == CalculationMethod::BenchmarkMatch)
        );
    }

    #[test]
    fn percentile_flag_overrides_config() {
        let ctx = fixtures::context();
        let batch = run(&args(Some(75.0), false), &ctx).expect("targets should run");
        assert_eq!(target_of(&batch, "e1"), 140_000.0);
    }

    #[test]
    fn manual_overrides_survive_unless_forced() {
        let mut ctx = fixtures::context();
        let manual = pulse_comp::manual_override("e1", "default", 130_000.0, "retention")
            .expect("valid override");
        ctx.bundle.existing_targets = vec![manual];

        let kept = run(&args(None, false), &ctx).expect("targets should run");
        assert_eq!(kept.preserved.len(), 1);
        assert!(kept.targets.iter().all(|t| t.employee_id != "e1"));

        let forced = run(&args(None, true), &ctx).expect("targets should run");
        assert!(forced.preserved.is_empty());
        assert_eq!(target_of(&forced, "e1"), 125_000.0);
    }

    #[test]
    fn out_of_range_percentile_is_an_error() {
        let ctx = fixtures::context();
        assert!(run(&args(Some(100.0), false), &ctx).is_err());
    }
}
