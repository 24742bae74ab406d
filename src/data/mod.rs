//! Sources of per-project crash and coverage tables.

mod simulated;

pub use simulated::{SimulatedDataSource, COVERAGE_OFFSETS, SAMPLE_DATES};

use crate::error::Result;
use crate::types::{ProjectData, ProjectMap};

/// Anything that can supply the crash and coverage tables for a project.
///
/// Analysis and rendering only see [`ProjectData`], so a real crash/coverage
/// backend can replace [`SimulatedDataSource`] without touching them.
pub trait DataSource {
    /// Tables for a single project
    fn project_data(&self, project: &str) -> Result<ProjectData>;

    /// Tables for every requested project. Fails on the first unknown project.
    fn fetch_project_data(&self, projects: &[String]) -> Result<ProjectMap<ProjectData>> {
        let mut data = ProjectMap::new();
        for project in projects {
            data.insert(project.clone(), self.project_data(project)?);
        }
        Ok(data)
    }
}
