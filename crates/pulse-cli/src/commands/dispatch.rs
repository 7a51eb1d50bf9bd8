use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Match(args) => commands::matching::handle(args, ctx, flags),
        Commands::Kpi(args) => commands::kpi::handle(args, ctx, flags),
        Commands::Health => commands::health::handle(ctx, flags),
        Commands::Targets(args) => commands::targets::handle(args, ctx, flags),
        Commands::Kpis => commands::kpis::handle(flags),
    }
}
