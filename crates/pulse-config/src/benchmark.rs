//! Benchmark selection settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BenchmarkConfig {
    /// Rows with a smaller survey sample are ignored. `0` accepts every row.
    #[serde(default)]
    pub min_sample_size: u32,
}
