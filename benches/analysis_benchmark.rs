/// Benchmark module for analysis and chart rendering.
/// Measures growth-rate analysis over large coverage tables and PNG rendering.
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use oss_fuzz_stats::analysis::analyze_project_data;
use oss_fuzz_stats::plotting::render_coverage_trends;
use oss_fuzz_stats::types::{CoverageSample, ProjectMap};
use oss_fuzz_stats::{DataSource, ProjectData, SimulatedDataSource};
use tempfile::TempDir;

/// Build a project with one coverage sample per day over `days` days
fn large_project(days: i64) -> ProjectData {
    let start = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let coverage = (0..days)
        .map(|i| CoverageSample {
            date: (start + chrono::Duration::days(i)).format("%d-%m-%Y").to_string(),
            coverage: 40.0 + (i as f64 * 0.01) % 50.0,
        })
        .collect();

    ProjectData {
        crashes: SimulatedDataSource::default()
            .project_data("zlib")
            .unwrap()
            .crashes,
        coverage,
    }
}

fn bench_analysis(c: &mut Criterion) {
    let mut data = ProjectMap::new();
    for i in 0..10 {
        data.insert(format!("project_{}", i), large_project(2_000));
    }

    c.bench_function("analyze_project_data", |b| {
        b.iter(|| analyze_project_data(black_box(&data)).unwrap())
    });
}

fn bench_simulated_source(c: &mut Criterion) {
    let source = SimulatedDataSource::default();
    let projects: Vec<String> = ["zlib", "libpng", "openssl"].iter().map(|p| p.to_string()).collect();

    c.bench_function("simulated_fetch_and_analyze", |b| {
        b.iter(|| {
            let data = source.fetch_project_data(black_box(&projects)).unwrap();
            analyze_project_data(&data).unwrap()
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let plot_path = temp_dir.path().join("coverage_trends.png");
    let projects: Vec<String> = (0..3).map(|i| format!("project_{}", i)).collect();
    let data: ProjectMap<ProjectData> = projects
        .iter()
        .map(|p| (p.clone(), large_project(365)))
        .collect();

    let mut group = c.benchmark_group("render");
    group.sample_size(10);
    group.bench_function("render_coverage_trends", |b| {
        b.iter(|| render_coverage_trends(&data, &projects, &plot_path).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_analysis, bench_simulated_source, bench_render);
criterion_main!(benches);
