use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Map free-text job titles onto the role taxonomy.
    Match(MatchArgs),
    /// Calculate workforce KPIs for the bundle's employees.
    Kpi(KpiArgs),
    /// Composite workforce health score.
    Health,
    /// Per-employee compensation targets from market benchmarks.
    Targets(TargetsArgs),
    /// List the KPI registry.
    Kpis,
}

#[derive(Clone, Debug, Args)]
pub struct MatchArgs {
    /// Titles to match; defaults to every employee role in the bundle.
    pub titles: Vec<String>,
    /// Include taxonomy suggestions for unresolved titles.
    #[arg(long)]
    pub suggest: bool,
}

#[derive(Clone, Debug, Args)]
pub struct KpiArgs {
    /// KPI id to calculate (repeatable); all KPIs when omitted.
    #[arg(long = "kpi")]
    pub kpis: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct TargetsArgs {
    /// Scenario the targets belong to.
    #[arg(long, default_value = "default")]
    pub scenario: String,
    /// Market percentile to target; defaults to the configured one.
    #[arg(long)]
    pub percentile: Option<f64>,
    /// Recalculate employees with a manual override.
    #[arg(long)]
    pub force: bool,
}
