use log::info;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::types::{MetadataRecord, ProjectAnalysis, ProjectData, ProjectMap};

/// The JSON document written at the end of a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Descriptor (or not-found sentinel) per project
    pub metadata: ProjectMap<MetadataRecord>,
    pub analysis: ProjectMap<ProjectAnalysis>,
    /// Crash and coverage tables exactly as the data source returned them
    pub raw_data: ProjectMap<ProjectData>,
}

impl Report {
    pub fn new(
        metadata: ProjectMap<MetadataRecord>,
        analysis: ProjectMap<ProjectAnalysis>,
        raw_data: ProjectMap<ProjectData>,
    ) -> Self {
        Self {
            metadata,
            analysis,
            raw_data,
        }
    }

    /// Serialize with four-space indentation
    pub fn to_json(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)?;
        buffer.push(b'\n');
        Ok(buffer)
    }
}

/// Write the report to `path`, replacing any previous file.
///
/// The document is fully serialized before the file is touched, so a
/// serialization failure leaves an existing report in place.
pub fn write_report(report: &Report, path: &Path) -> Result<()> {
    let json = report.to_json()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, json)?;

    info!("Wrote analysis report to {}", path.display());
    Ok(())
}

/// Load a previously written report
pub fn read_report(path: &Path) -> Result<Report> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
