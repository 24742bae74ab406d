//! # OSS-Fuzz Coverage Statistics Library
//!
//! `oss_fuzz_stats` fetches metadata for OSS-Fuzz projects, summarizes their
//! crash and coverage data, renders a coverage trend chart, and writes a JSON
//! report.
//!
//! ## Features
//!
//! - Look up project descriptors through the GitHub contents API
//! - Pluggable crash/coverage data sources (a fixed simulated dataset ships by default)
//! - Unique crash counts, mean coverage, and period-over-period growth rates
//! - Multi-project coverage trend chart rendered to PNG
//! - Pretty-printed JSON report with metadata, analysis, and raw tables
//!
//! ## Example
//!
//! ```no_run
//! use oss_fuzz_stats::{Pipeline, PipelineConfig};
//!
//! # async fn run() -> oss_fuzz_stats::Result<()> {
//! let pipeline = Pipeline::new(PipelineConfig::default())?;
//! let report = pipeline.run(&["zlib".to_string(), "libpng".to_string()]).await?;
//! println!("zlib has {} unique crashes", report.analysis["zlib"].unique_crashes);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod config;
pub mod data;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod plotting;
pub mod report;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use config::{BaselineTable, PipelineConfig};
pub use data::{DataSource, SimulatedDataSource};
pub use error::{Error, Result};
pub use pipeline::Pipeline;
pub use report::Report;
pub use types::{CoverageSample, CrashEvent, MetadataRecord, ProjectAnalysis, ProjectData};
