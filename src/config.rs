//! Runtime configuration for the pipeline.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{Error, Result};

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";
pub const CHART_FILE_NAME: &str = "coverage_trends.png";
pub const REPORT_FILE_NAME: &str = "oss_fuzz_analysis.json";

/// Baseline coverage percentage per project, used to synthesize samples.
#[derive(Clone, Debug, PartialEq)]
pub struct BaselineTable {
    baselines: BTreeMap<String, f64>,
}

impl BaselineTable {
    /// An empty table; every lookup fails until entries are added.
    pub fn empty() -> Self {
        Self {
            baselines: BTreeMap::new(),
        }
    }

    /// Add or replace the baseline for a project
    pub fn with_baseline(mut self, project: impl Into<String>, coverage: f64) -> Self {
        self.insert(project, coverage);
        self
    }

    pub fn insert(&mut self, project: impl Into<String>, coverage: f64) {
        self.baselines.insert(project.into(), coverage);
    }

    /// Look up a project's baseline. Unlisted projects are an error, never a default.
    pub fn get(&self, project: &str) -> Result<f64> {
        self.baselines
            .get(project)
            .copied()
            .ok_or_else(|| Error::UnknownProject(project.to_string()))
    }
}

impl Default for BaselineTable {
    fn default() -> Self {
        Self::empty()
            .with_baseline("zlib", 70.0)
            .with_baseline("libpng", 75.0)
            .with_baseline("openssl", 65.0)
    }
}

/// A single `NAME=VALUE` override as accepted on the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct BaselineEntry {
    pub project: String,
    pub coverage: f64,
}

impl FromStr for BaselineEntry {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidBaseline(s.to_string());
        let (name, value) = s.split_once('=').ok_or_else(invalid)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(invalid());
        }
        let coverage: f64 = value.trim().parse().map_err(|_| invalid())?;
        if !coverage.is_finite() {
            return Err(invalid());
        }
        Ok(Self {
            project: name.to_string(),
            coverage,
        })
    }
}

/// Settings shared by every stage of a run.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Base URL of the repository-hosting API
    pub api_base_url: String,
    /// Directory receiving the chart and the JSON report
    pub output_dir: PathBuf,
    pub baselines: BaselineTable,
}

impl PipelineConfig {
    pub fn chart_path(&self) -> PathBuf {
        self.output_dir.join(CHART_FILE_NAME)
    }

    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(REPORT_FILE_NAME)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            baselines: BaselineTable::default(),
        }
    }
}
