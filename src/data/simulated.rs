use log::debug;

use super::DataSource;
use crate::config::BaselineTable;
use crate::error::Result;
use crate::types::{CoverageSample, CrashEvent, ProjectData};

/// Measurement dates shared by the crash and coverage tables.
/// Two samples fall on 06-03-2025.
pub const SAMPLE_DATES: [&str; 9] = [
    "15-01-2025",
    "28-01-2025",
    "31-01-2025",
    "10-02-2025",
    "20-02-2025",
    "25-02-2025",
    "06-03-2025",
    "06-03-2025",
    "15-03-2025",
];

/// Added to a project's baseline to produce each coverage sample, in order.
pub const COVERAGE_OFFSETS: [f64; 9] = [0.0, 3.0, 5.0, 7.0, 10.0, 12.0, 15.0, 17.0, 20.0];

// (crash_hash, type); the last two entries are the same defect recurring.
const CRASHES: [(&str, &str); 9] = [
    ("mno345", "null-pointer"),
    ("pqr678", "division-by-zero"),
    ("jkl012", "integer-overflow"),
    ("stu901", "buffer-overflow"),
    ("vwx234", "race-condition"),
    ("ghi789", "stack-overflow"),
    ("def456", "use-after-free"),
    ("abc123", "heap-overflow"),
    ("abc123", "heap-overflow"),
];

/// Fixed dataset standing in for the OSS-Fuzz crash and coverage databases.
///
/// Every project gets the same crash events; coverage is the project's
/// baseline plus [`COVERAGE_OFFSETS`].
#[derive(Clone, Debug, Default)]
pub struct SimulatedDataSource {
    baselines: BaselineTable,
}

impl SimulatedDataSource {
    pub fn new(baselines: BaselineTable) -> Self {
        Self { baselines }
    }

    pub fn baselines(&self) -> &BaselineTable {
        &self.baselines
    }

    fn crashes() -> Vec<CrashEvent> {
        SAMPLE_DATES
            .iter()
            .zip(CRASHES.iter())
            .map(|(date, (hash, kind))| CrashEvent {
                date: date.to_string(),
                crash_hash: hash.to_string(),
                kind: kind.to_string(),
            })
            .collect()
    }

    fn coverage(baseline: f64) -> Vec<CoverageSample> {
        SAMPLE_DATES
            .iter()
            .zip(COVERAGE_OFFSETS.iter())
            .map(|(date, offset)| CoverageSample {
                date: date.to_string(),
                coverage: baseline + offset,
            })
            .collect()
    }
}

impl DataSource for SimulatedDataSource {
    fn project_data(&self, project: &str) -> Result<ProjectData> {
        let baseline = self.baselines.get(project)?;
        debug!("simulating data for '{}' from baseline {}", project, baseline);

        Ok(ProjectData {
            crashes: Self::crashes(),
            coverage: Self::coverage(baseline),
        })
    }
}
