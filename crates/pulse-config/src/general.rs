//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_log_filter() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// `tracing` filter used when `PULSE_LOG` is unset (e.g., `"info"`,
    /// `"pulse_match=debug"`).
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
        }
    }
}
