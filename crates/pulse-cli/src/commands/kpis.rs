use pulse_core::entities::KpiDefinition;
use pulse_kpi::KpiRegistry;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct RegistryResponse {
    pub version: u32,
    pub kpis: Vec<KpiDefinition>,
}

/// Handle `pulse kpis`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&run(), flags.format)
}

#[must_use]
pub fn run() -> RegistryResponse {
    let registry = KpiRegistry::builtin();
    RegistryResponse {
        version: registry.version(),
        kpis: registry.definitions(),
    }
}
