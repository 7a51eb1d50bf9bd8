use pulse_config::PulseConfig;
use pulse_match::{InMemoryMappingStore, RoleMatcher, Taxonomy};

use crate::bundle::Bundle;

/// Loaded configuration plus the input bundle, handed to every command.
#[derive(Debug)]
pub struct AppContext {
    pub config: PulseConfig,
    pub bundle: Bundle,
}

impl AppContext {
    pub const fn new(config: PulseConfig, bundle: Bundle) -> Self {
        Self { config, bundle }
    }

    /// Matcher over the built-in taxonomy with the bundle's library entries.
    pub fn matcher(&self) -> RoleMatcher {
        let store = InMemoryMappingStore::from_entries(self.bundle.library.iter().cloned());
        RoleMatcher::with_store(Taxonomy::builtin(), store, self.config.matcher.clone())
    }
}
