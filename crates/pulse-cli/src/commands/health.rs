use pulse_core::entities::HealthScoreSnapshot;
use pulse_kpi::KpiEngine;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pulse health`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = run(ctx)?;
    output(&snapshot, flags.format)
}

/// Every registry KPI scored and aggregated, with the cost signal attached
/// when the bundle carries a long enough history.
pub fn run(ctx: &AppContext) -> anyhow::Result<HealthScoreSnapshot> {
    let metadata = ctx.bundle.require_metadata()?;
    let batch = KpiEngine::default().calculate_all(&ctx.bundle.employees, metadata);

    let mut snapshot = pulse_health::aggregate(
        &batch.values,
        &ctx.bundle.benchmark_ranges,
        &ctx.config.health.weights,
        ctx.bundle.previous.as_ref(),
    )?;
    snapshot.cost_signal = pulse_health::cost_signal(&ctx.bundle.cost_history);

    tracing::info!(
        score = snapshot.composite_score,
        grade = %snapshot.grade,
        "pulse: health scored"
    );
    Ok(snapshot)
}
