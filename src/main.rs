//! OSS-Fuzz Coverage Statistics Tool
//!
//! Analyzes coverage and crash data for OSS-Fuzz projects and writes a trend
//! chart plus a JSON report.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tokio::runtime::Runtime;

use oss_fuzz_stats::config::{BaselineEntry, DEFAULT_API_BASE_URL, DEFAULT_OUTPUT_DIR};
use oss_fuzz_stats::{BaselineTable, Pipeline, PipelineConfig};

/// Analyze coverage and crash data for OSS-Fuzz projects
#[derive(Debug, Parser)]
#[command(name = "oss-fuzz-stats", version, about)]
struct Args {
    /// OSS-Fuzz project names to analyze
    #[arg(required = true, num_args = 1..)]
    projects: Vec<String>,

    /// Directory receiving the chart and the JSON report
    #[arg(long, env = "OSS_FUZZ_STATS_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Base URL of the GitHub API
    #[arg(long, env = "OSS_FUZZ_STATS_API_URL", default_value = DEFAULT_API_BASE_URL)]
    api_url: String,

    /// Extra or overriding baseline coverage, as NAME=VALUE (repeatable)
    #[arg(long = "baseline", value_name = "NAME=VALUE")]
    baselines: Vec<BaselineEntry>,
}

impl Args {
    fn into_config(self) -> (PipelineConfig, Vec<String>) {
        let mut baselines = BaselineTable::default();
        for entry in self.baselines {
            baselines.insert(entry.project, entry.coverage);
        }

        let config = PipelineConfig {
            api_base_url: self.api_url,
            output_dir: self.output_dir,
            baselines,
        };
        (config, self.projects)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let (config, projects) = args.into_config();

    let rt = Runtime::new().context("failed to start async runtime")?;
    let pipeline = Pipeline::new(config).context("failed to build pipeline")?;
    rt.block_on(pipeline.run(&projects))
        .context("analysis run failed")?;

    Ok(())
}
