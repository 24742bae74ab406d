//! # Common Types
//!
//! This module contains the records passed between the pipeline stages:
//! metadata looked up per project, the raw crash and coverage tables, and
//! the analysis derived from them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel message stored for projects the metadata API does not know.
pub const PROJECT_NOT_FOUND: &str = "Project not found";

/// Per-project mapping, ordered by project name so reports are stable.
pub type ProjectMap<T> = BTreeMap<String, T>;

/// Metadata returned by the repository-hosting API for one project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataRecord {
    /// The lookup failed with a non-200 status
    NotFound(NotFound),
    /// The decoded response body, kept verbatim
    Found(serde_json::Value),
}

/// Serialized form of a failed lookup: `{"error": "Project not found"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotFound {
    pub error: String,
}

impl MetadataRecord {
    pub fn not_found() -> Self {
        Self::NotFound(NotFound {
            error: PROJECT_NOT_FOUND.to_string(),
        })
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// A single crash report.
///
/// Several events may share a `crash_hash` when the same defect recurs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CrashEvent {
    /// Date of the crash as `DD-MM-YYYY`
    pub date: String,
    /// Identifier grouping crashes presumed to stem from the same defect
    pub crash_hash: String,
    /// Crash category, e.g. `heap-overflow`
    #[serde(rename = "type")]
    pub kind: String,
}

/// A coverage measurement for one date.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoverageSample {
    /// Date of the measurement as `DD-MM-YYYY`
    pub date: String,
    /// Percentage of code exercised by fuzzing
    pub coverage: f64,
}

/// The raw tables for one project, in the order the data source produced them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectData {
    pub crashes: Vec<CrashEvent>,
    pub coverage: Vec<CoverageSample>,
}

/// One coverage sample augmented with its period-over-period change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: String,
    pub coverage: f64,
    /// Percent change from the previous sample; `None` for the first one
    pub growth_rate: Option<f64>,
}

/// Summary statistics computed for one project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectAnalysis {
    /// Number of distinct crash hashes
    pub unique_crashes: usize,
    /// Arithmetic mean of the coverage column
    pub avg_coverage: f64,
    /// Coverage samples in source order with their growth rates
    pub coverage_trend: Vec<TrendPoint>,
}
