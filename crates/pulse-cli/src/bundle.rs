//! JSON input bundle shared by every command.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use anyhow::Context;
use pulse_core::entities::{
    BenchmarkRange, BenchmarkRow, CompensationTarget, DatasetMetadata, EmployeeRecord,
    HealthScoreSnapshot, OrgContext, RoleMappingEntry,
};
use serde::Deserialize;

/// Everything a command may read. Every field is optional so a bundle only
/// needs what the invoked command uses.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Bundle {
    #[serde(default)]
    pub employees: Vec<EmployeeRecord>,
    #[serde(default)]
    pub metadata: Option<DatasetMetadata>,
    /// Market context; falls back to the dataset metadata's.
    #[serde(default)]
    pub context: Option<OrgContext>,
    #[serde(default)]
    pub benchmarks: Vec<BenchmarkRow>,
    /// Learned title mappings seeding the in-memory library.
    #[serde(default)]
    pub library: Vec<RoleMappingEntry>,
    /// Per-KPI benchmark ranges overriding the registry defaults.
    #[serde(default)]
    pub benchmark_ranges: BTreeMap<String, BenchmarkRange>,
    /// Last health snapshot, for the trend.
    #[serde(default)]
    pub previous: Option<HealthScoreSnapshot>,
    /// Historical cost series, oldest first, for the cost signal.
    #[serde(default)]
    pub cost_history: Vec<f64>,
    /// Stored targets; manual overrides among them are preserved.
    #[serde(default)]
    pub existing_targets: Vec<CompensationTarget>,
}

impl Bundle {
    /// Read a bundle from `path`, or from stdin when the path is `-`.
    /// No path yields an empty bundle.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is not a valid bundle.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        if path.as_os_str() == "-" {
            return Self::from_reader(io::stdin().lock()).context("failed to read bundle from stdin");
        }

        let file = File::open(path)
            .with_context(|| format!("failed to open bundle '{}'", path.display()))?;
        let bundle = Self::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse bundle '{}'", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            employees = bundle.employees.len(),
            benchmarks = bundle.benchmarks.len(),
            library = bundle.library.len(),
            "pulse: loaded bundle"
        );
        Ok(bundle)
    }

    fn from_reader(reader: impl Read) -> anyhow::Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Dataset metadata, required by the KPI and health commands.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundle has no `metadata`.
    pub fn require_metadata(&self) -> anyhow::Result<&DatasetMetadata> {
        self.metadata
            .as_ref()
            .context("bundle has no 'metadata' (currency and as_of are required)")
    }

    /// Explicit context, else the dataset's, else none.
    #[must_use]
    pub fn context(&self) -> Option<OrgContext> {
        self.context
            .clone()
            .or_else(|| self.metadata.as_ref().map(DatasetMetadata::context))
            .map(|context| context.normalized())
            .filter(|context| !context.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_bundle(json: &serde_json::Value) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{json}").expect("write bundle");
        file
    }

    #[test]
    fn missing_path_is_an_empty_bundle() {
        let bundle = Bundle::load(None).expect("empty bundle");
        assert!(bundle.employees.is_empty());
        assert!(bundle.metadata.is_none());
        assert!(bundle.context().is_none());
    }

    #[test]
    fn loads_partial_bundle_from_file() {
        let file = write_bundle(&serde_json::json!({
            "employees": [
                { "id": "e1", "role": "Software Engineer", "total_compensation": 120000.0 }
            ],
            "metadata": { "currency": "USD", "as_of": "2024-12-31", "industry": " Technology " },
            "cost_history": [1.0, 2.0, 3.0]
        }));

        let bundle = Bundle::load(Some(file.path())).expect("bundle should load");
        assert_eq!(bundle.employees.len(), 1);
        assert_eq!(bundle.cost_history, vec![1.0, 2.0, 3.0]);
        assert!(bundle.require_metadata().is_ok());

        let context = bundle.context().expect("metadata context");
        assert_eq!(context.industry.as_deref(), Some("technology"));
        assert_eq!(context.region, None);
    }

    #[test]
    fn explicit_context_wins_over_metadata() {
        let file = write_bundle(&serde_json::json!({
            "metadata": { "currency": "USD", "as_of": "2024-12-31", "industry": "retail" },
            "context": { "region": "EMEA" }
        }));

        let bundle = Bundle::load(Some(file.path())).expect("bundle should load");
        let context = bundle.context().expect("explicit context");
        assert_eq!(context.industry, None);
        assert_eq!(context.region.as_deref(), Some("emea"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let file = write_bundle(&serde_json::json!({ "employes": [] }));
        let error = Bundle::load(Some(file.path())).expect_err("typo should fail");
        assert!(format!("{error:#}").contains("failed to parse bundle"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let error = Bundle::load(Some(Path::new("/nonexistent/pulse-bundle.json")))
            .expect_err("missing file should fail");
        assert!(format!("{error:#}").contains("pulse-bundle.json"));
    }

    #[test]
    fn metadata_is_required_on_demand() {
        let bundle = Bundle::default();
        assert!(bundle.require_metadata().is_err());
    }
}
