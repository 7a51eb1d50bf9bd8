use anyhow::Context;
use clap::Parser;
use pulse_config::PulseConfig;

mod bundle;
mod cli;
mod commands;
mod context;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("pulse error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();

    let config = PulseConfig::load_with_dotenv().context("failed to load pulse configuration")?;
    init_tracing(flags.quiet, flags.verbose, &config.general.log_filter)?;

    if matches!(cli.command, cli::Commands::Kpis) {
        return commands::kpis::handle(&flags);
    }

    let bundle = bundle::Bundle::load(flags.input.as_deref())?;
    let ctx = context::AppContext::new(config, bundle);
    commands::dispatch::dispatch(&cli.command, &ctx, &flags)
}

fn init_tracing(quiet: bool, verbose: bool, configured: &str) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        configured
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PULSE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
