use super::*;
use crate::data::{DataSource, SimulatedDataSource};
use crate::error::Error;
use crate::types::{CoverageSample, CrashEvent, ProjectData, ProjectMap};
use pretty_assertions::assert_eq;

const TOLERANCE: f64 = 1e-9;

fn crash(date: &str, hash: &str) -> CrashEvent {
    CrashEvent {
        date: date.to_string(),
        crash_hash: hash.to_string(),
        kind: "heap-overflow".to_string(),
    }
}

fn sample(date: &str, coverage: f64) -> CoverageSample {
    CoverageSample {
        date: date.to_string(),
        coverage,
    }
}

fn simulated(projects: &[&str]) -> ProjectMap<ProjectData> {
    let projects: Vec<String> = projects.iter().map(|p| p.to_string()).collect();
    SimulatedDataSource::default()
        .fetch_project_data(&projects)
        .unwrap()
}

#[test]
fn test_unique_crashes_collapses_duplicates() {
    let crashes = vec![
        crash("01-01-2025", "abc"),
        crash("02-01-2025", "def"),
        crash("03-01-2025", "abc"),
    ];
    assert_eq!(unique_crashes(&crashes), 2);
    assert_eq!(unique_crashes(&[]), 0);
}

#[test]
fn test_simulated_unique_crashes() {
    let data = simulated(&["zlib"]);
    let analysis = analyze_project_data(&data).unwrap();
    // abc123 appears twice
    assert_eq!(analysis["zlib"].unique_crashes, 8);
}

#[test]
fn test_avg_coverage_is_mean_within_bounds() {
    let data = simulated(&["zlib", "libpng", "openssl"]);
    let analysis = analyze_project_data(&data).unwrap();

    for (project, tables) in &data {
        let values: Vec<f64> = tables.coverage.iter().map(|s| s.coverage).collect();
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        let avg = analysis[project].avg_coverage;
        assert!((avg - mean).abs() < TOLERANCE, "{project}: {avg} != {mean}");
        assert!(avg >= min && avg <= max);
    }
    // (0+3+5+7+10+12+15+17+20) / 9 = 89 / 9
    assert!((analysis["zlib"].avg_coverage - (70.0 + 89.0 / 9.0)).abs() < TOLERANCE);
}

#[test]
fn test_growth_rates() {
    let rates = growth_rates(&[50.0, 75.0, 60.0]);
    assert_eq!(rates.len(), 3);
    assert_eq!(rates[0], None);
    assert!((rates[1].unwrap() - 50.0).abs() < TOLERANCE);
    assert!((rates[2].unwrap() + 20.0).abs() < TOLERANCE);
}

#[test]
fn test_growth_rate_edge_cases() {
    assert!(growth_rates(&[]).is_empty());
    assert_eq!(growth_rates(&[42.0]), vec![None]);
    // change from zero is undefined
    assert_eq!(growth_rates(&[0.0, 10.0])[1], None);
}

#[test]
fn test_trend_matches_formula() {
    let data = simulated(&["openssl"]);
    let analysis = analyze_project_data(&data).unwrap();
    let trend = &analysis["openssl"].coverage_trend;

    assert_eq!(trend.len(), 9);
    assert_eq!(trend[0].growth_rate, None);
    for pair in trend.windows(2) {
        let (prev, cur) = (&pair[0], &pair[1]);
        let expected = (cur.coverage - prev.coverage) / prev.coverage * 100.0;
        assert!((cur.growth_rate.unwrap() - expected).abs() < TOLERANCE);
    }
}

#[test]
fn test_trend_keeps_source_order_and_dates() {
    let data = simulated(&["zlib"]);
    let analysis = analyze_project_data(&data).unwrap();

    let source_dates: Vec<&str> = data["zlib"].coverage.iter().map(|s| s.date.as_str()).collect();
    let trend_dates: Vec<&str> = analysis["zlib"]
        .coverage_trend
        .iter()
        .map(|p| p.date.as_str())
        .collect();
    assert_eq!(trend_dates, source_dates);
}

#[test]
fn test_analysis_is_idempotent_and_non_destructive() {
    let data = simulated(&["zlib", "libpng"]);
    let before = data.clone();

    let first = analyze_project_data(&data).unwrap();
    let second = analyze_project_data(&data).unwrap();

    assert_eq!(first, second);
    assert_eq!(data, before);
}

#[test]
fn test_single_sample_project() {
    let data = ProjectData {
        crashes: vec![crash("15-01-2025", "test123")],
        coverage: vec![sample("15-01-2025", 75.0)],
    };
    let analysis = analyze_project("test_project", &data).unwrap();

    assert_eq!(analysis.unique_crashes, 1);
    assert_eq!(analysis.avg_coverage, 75.0);
    assert_eq!(analysis.coverage_trend.len(), 1);
    assert_eq!(analysis.coverage_trend[0].growth_rate, None);
}

#[test]
fn test_empty_coverage_is_rejected() {
    let data = ProjectData {
        crashes: vec![crash("15-01-2025", "test123")],
        coverage: vec![],
    };
    assert!(matches!(
        analyze_project("empty", &data),
        Err(Error::EmptyCoverage(name)) if name == "empty"
    ));
}

#[test]
fn test_non_finite_coverage_is_rejected() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let data = ProjectData {
            crashes: vec![],
            coverage: vec![sample("15-01-2025", 70.0), sample("28-01-2025", bad)],
        };
        match analyze_project("broken", &data) {
            Err(Error::NonFiniteCoverage { project, date }) => {
                assert_eq!(project, "broken");
                assert_eq!(date, "28-01-2025");
            }
            other => panic!("expected NonFiniteCoverage, got {:?}", other),
        }
    }
}
