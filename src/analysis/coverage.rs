use log::debug;
use statrs::statistics::Statistics;
use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::types::{CrashEvent, ProjectAnalysis, ProjectData, ProjectMap, TrendPoint};

/// Number of distinct crash hashes in a crash table
pub fn unique_crashes(crashes: &[CrashEvent]) -> usize {
    crashes
        .iter()
        .map(|c| c.crash_hash.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Percent change between consecutive values, in order.
///
/// The first entry is always `None`. A change from a zero value is
/// undefined and also reported as `None`.
pub fn growth_rates(values: &[f64]) -> Vec<Option<f64>> {
    let mut rates = Vec::with_capacity(values.len());
    if values.is_empty() {
        return rates;
    }

    rates.push(None);
    rates.extend(values.windows(2).map(|pair| {
        let (prev, cur) = (pair[0], pair[1]);
        if prev == 0.0 {
            None
        } else {
            Some((cur - prev) / prev * 100.0)
        }
    }));
    rates
}

/// Summarize one project's tables. The tables are only read.
pub fn analyze_project(project: &str, data: &ProjectData) -> Result<ProjectAnalysis> {
    if data.coverage.is_empty() {
        return Err(Error::EmptyCoverage(project.to_string()));
    }
    if let Some(sample) = data.coverage.iter().find(|s| !s.coverage.is_finite()) {
        return Err(Error::NonFiniteCoverage {
            project: project.to_string(),
            date: sample.date.clone(),
        });
    }

    let values: Vec<f64> = data.coverage.iter().map(|s| s.coverage).collect();
    let avg_coverage = values.iter().mean();

    let coverage_trend = data
        .coverage
        .iter()
        .zip(growth_rates(&values))
        .map(|(sample, growth_rate)| TrendPoint {
            date: sample.date.clone(),
            coverage: sample.coverage,
            growth_rate,
        })
        .collect();

    let analysis = ProjectAnalysis {
        unique_crashes: unique_crashes(&data.crashes),
        avg_coverage,
        coverage_trend,
    };
    debug!(
        "{}: {} unique crashes, avg coverage {:.2}",
        project, analysis.unique_crashes, analysis.avg_coverage
    );
    Ok(analysis)
}

/// Analyze every project in the mapping
pub fn analyze_project_data(
    project_data: &ProjectMap<ProjectData>,
) -> Result<ProjectMap<ProjectAnalysis>> {
    project_data
        .iter()
        .map(|(project, data)| analyze_project(project, data).map(|a| (project.clone(), a)))
        .collect()
}
