//! Sequences the stages of a run: fetch metadata, fetch data, analyze,
//! render the chart, then write the report.

use log::{info, warn};
use std::collections::HashSet;

use crate::analysis::analyze_project_data;
use crate::config::PipelineConfig;
use crate::data::{DataSource, SimulatedDataSource};
use crate::error::Result;
use crate::fetch::MetadataClient;
use crate::plotting::TrendRenderer;
use crate::report::{write_report, Report};

/// Drop repeated project identifiers, keeping the first occurrence
pub fn dedup_projects(projects: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    projects
        .iter()
        .filter(|project| {
            let first = seen.insert(project.as_str());
            if !first {
                warn!("ignoring duplicate project '{}'", project);
            }
            first
        })
        .cloned()
        .collect()
}

/// One configured analysis run.
#[derive(Debug)]
pub struct Pipeline<S = SimulatedDataSource> {
    config: PipelineConfig,
    metadata: MetadataClient,
    source: S,
    renderer: TrendRenderer,
}

impl Pipeline<SimulatedDataSource> {
    /// A pipeline backed by the simulated dataset and the configured baselines
    pub fn new(config: PipelineConfig) -> Result<Self> {
        let source = SimulatedDataSource::new(config.baselines.clone());
        Self::with_source(config, source)
    }
}

impl<S: DataSource> Pipeline<S> {
    pub fn with_source(config: PipelineConfig, source: S) -> Result<Self> {
        let metadata = MetadataClient::new(config.api_base_url.clone())?;
        Ok(Self {
            config,
            metadata,
            source,
            renderer: TrendRenderer::default(),
        })
    }

    pub fn with_renderer(mut self, renderer: TrendRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run every stage in order. Any error aborts the remaining stages.
    pub async fn run(&self, projects: &[String]) -> Result<Report> {
        let projects = dedup_projects(projects);

        info!("Fetching metadata for {} project(s)", projects.len());
        let metadata = self.metadata.fetch_project_metadata(&projects).await?;

        info!("Fetching crash and coverage data");
        let raw_data = self.source.fetch_project_data(&projects)?;

        info!("Analyzing project data");
        let analysis = analyze_project_data(&raw_data)?;

        self.renderer
            .render(&raw_data, &projects, &self.config.chart_path())?;

        let report = Report::new(metadata, analysis, raw_data);
        write_report(&report, &self.config.report_path())?;

        Ok(report)
    }
}
