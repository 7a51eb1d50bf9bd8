use pulse_kpi::{KpiBatch, KpiEngine};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::KpiArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pulse kpi`.
pub fn handle(args: &KpiArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let batch = run(args, ctx)?;
    output(&batch, flags.format)
}

pub fn run(args: &KpiArgs, ctx: &AppContext) -> anyhow::Result<KpiBatch> {
    let metadata = ctx.bundle.require_metadata()?;
    let engine = KpiEngine::default();
    let batch = if args.kpis.is_empty() {
        engine.calculate_all(&ctx.bundle.employees, metadata)
    } else {
        engine.calculate(&ctx.bundle.employees, metadata, &args.kpis)?
    };
    tracing::info!(
        kpis = batch.values.len(),
        rejected = batch.rejected.len(),
        "pulse: calculated kpis"
    );
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;

    fn args(ids: &[&str]) -> KpiArgs {
        KpiArgs {
            kpis: ids.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn requested_kpis_in_request_order() {
        let ctx = fixtures::context();
        let batch = run(&args(&["fte_total", "headcount"]), &ctx).expect("kpis should run");

        let ids: Vec<&str> = batch.values.iter().map(|v| v.kpi_id.as_str()).collect();
        assert_eq!(ids, vec!["fte_total", "headcount"]);
        assert_eq!(batch.values[0].value, Some(2.5));
        assert_eq!(batch.values[1].value, Some(3.0));
        assert!(batch.rejected.is_empty());
    }

    #[test]
    fn all_kpis_when_none_requested() {
        let ctx = fixtures::context();
        let batch = run(&args(&[]), &ctx).expect("kpis should run");
        assert_eq!(batch.values.len(), pulse_kpi::KpiRegistry::builtin().specs().len());
    }

    #[test]
    fn unknown_kpi_is_an_error() {
        let ctx = fixtures::context();
        let error = run(&args(&["headcount", "vibes"]), &ctx).expect_err("unknown id");
        assert!(error.to_string().contains("vibes"));
    }

    #[test]
    fn bad_record_does_not_sink_the_batch() {
        let mut ctx = fixtures::context();
        ctx.bundle.employees[0].fte = 2.0;
        let batch = run(&args(&["headcount"]), &ctx).expect("kpis should run");

        assert_eq!(batch.rejected.len(), 1);
        assert_eq!(batch.rejected[0].employee_id, "e1");
        assert_eq!(batch.values[0].value, Some(2.0));
    }

    #[test]
    fn metadata_is_required() {
        let ctx = AppContext::new(Default::default(), Default::default());
        assert!(run(&args(&["headcount"]), &ctx).is_err());
    }
}
