use chrono::{Datelike, NaiveDate};
use log::info;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fmt::Display;
use std::fs;
use std::ops::Range;
use std::path::Path;

use super::styles::{ChartStyle, ChartTheme};
use crate::error::{Error, Result};
use crate::types::{ProjectData, ProjectMap};
use crate::utils::{format_date, parse_date};

pub const CHART_TITLE: &str = "Coverage Trends Across Projects";
pub const X_AXIS_LABEL: &str = "Date";
pub const Y_AXIS_LABEL: &str = "Coverage (%)";

type TrendChart<'a, 'b> = ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

// Helper function to wrap backend errors
fn chart_err<E: Display>(e: E) -> Error {
    Error::Chart(e.to_string())
}

/// One project's coverage samples, parsed and in chronological order.
#[derive(Clone, Debug, PartialEq)]
pub struct TrendSeries {
    pub project: String,
    pub points: Vec<(NaiveDate, f64)>,
}

impl TrendSeries {
    /// Parse the coverage table of `project` and sort it by date.
    ///
    /// The sort is stable, so samples sharing a date keep their table order.
    pub fn from_project(project: &str, data: &ProjectData) -> Result<Self> {
        let mut points = data
            .coverage
            .iter()
            .map(|s| parse_date(&s.date).map(|date| (date, s.coverage)))
            .collect::<Result<Vec<_>>>()?;
        points.sort_by_key(|(date, _)| *date);

        Ok(Self {
            project: project.to_string(),
            points,
        })
    }

    fn coords(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|(date, coverage)| (day_number(*date), *coverage))
            .collect()
    }
}

/// Draws coverage trends for a set of projects onto a PNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrendRenderer {
    pub theme: ChartTheme,
    pub style: ChartStyle,
}

impl TrendRenderer {
    pub fn new(theme: ChartTheme, style: ChartStyle) -> Self {
        Self { theme, style }
    }

    /// Render the selected projects and write the image to `output_path`,
    /// replacing any previous file.
    pub fn render(
        &self,
        project_data: &ProjectMap<ProjectData>,
        projects: &[String],
        output_path: &Path,
    ) -> Result<()> {
        let series = projects
            .iter()
            .map(|project| {
                let data = project_data
                    .get(project)
                    .ok_or_else(|| Error::UnknownProject(project.clone()))?;
                TrendSeries::from_project(project, data)
            })
            .collect::<Result<Vec<_>>>()?;

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // The backend holds the pixel buffer until this scope ends
        {
            let root = BitMapBackend::new(output_path, (self.style.width, self.style.height))
                .into_drawing_area();
            self.draw(&root, &series)?;
            root.present().map_err(chart_err)?;
        }

        info!(
            "Wrote coverage chart for {} project(s) to {}",
            series.len(),
            output_path.display()
        );
        Ok(())
    }

    fn draw(&self, root: &DrawingArea<BitMapBackend, Shift>, series: &[TrendSeries]) -> Result<()> {
        let theme = &self.theme;
        let style = &self.style;

        root.fill(&theme.background_color).map_err(chart_err)?;

        let (x_range, y_range) = axis_ranges(series);
        let mut chart = ChartBuilder::on(root)
            .caption(
                CHART_TITLE,
                ("sans-serif", style.title_font_size)
                    .into_font()
                    .color(&theme.text_color),
            )
            .margin(style.margin)
            .x_label_area_size(style.label_area_size)
            .y_label_area_size(style.label_area_size)
            .build_cartesian_2d(x_range, y_range)
            .map_err(chart_err)?;

        chart
            .configure_mesh()
            .x_desc(X_AXIS_LABEL)
            .y_desc(Y_AXIS_LABEL)
            .x_labels(style.x_labels)
            .x_label_formatter(&format_day_label)
            .y_label_formatter(&|y| format!("{:.0}", y))
            .bold_line_style(theme.grid_color)
            .light_line_style(theme.grid_color.mix(0.4))
            .axis_style(theme.axis_color)
            .label_style(("sans-serif", style.font_size).into_font().color(&theme.text_color))
            .axis_desc_style(("sans-serif", style.font_size).into_font().color(&theme.text_color))
            .draw()
            .map_err(chart_err)?;

        for (idx, s) in series.iter().enumerate() {
            self.draw_series(&mut chart, s, Palette99::pick(idx).to_rgba())?;
        }

        if !series.is_empty() {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::LowerRight)
                .background_style(theme.background_color.mix(0.8))
                .border_style(theme.axis_color)
                .label_font(("sans-serif", style.font_size).into_font().color(&theme.text_color))
                .draw()
                .map_err(chart_err)?;
        }

        Ok(())
    }

    fn draw_series(&self, chart: &mut TrendChart, series: &TrendSeries, color: RGBAColor) -> Result<()> {
        let coords = series.coords();

        chart
            .draw_series(LineSeries::new(
                coords.clone(),
                color.stroke_width(self.style.line_width),
            ))
            .map_err(chart_err)?
            .label(series.project.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

        let marker_size = self.style.marker_size;
        chart
            .draw_series(
                coords
                    .into_iter()
                    .map(|point| Circle::new(point, marker_size, color.filled())),
            )
            .map_err(chart_err)?;

        Ok(())
    }
}

/// Render the selected projects with the default theme and style
pub fn render_coverage_trends(
    project_data: &ProjectMap<ProjectData>,
    projects: &[String],
    output_path: &Path,
) -> Result<()> {
    TrendRenderer::default().render(project_data, projects, output_path)
}

fn day_number(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

fn format_day_label(x: &f64) -> String {
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
        .map(format_date)
        .unwrap_or_default()
}

/// Axis ranges covering every point, padded so single points and flat
/// lines still get a visible span.
pub(crate) fn axis_ranges(series: &[TrendSeries]) -> (Range<f64>, Range<f64>) {
    let points = series.iter().flat_map(|s| s.coords());
    let bounds = points.fold(None, |acc: Option<(f64, f64, f64, f64)>, (x, y)| {
        Some(match acc {
            None => (x, x, y, y),
            Some((x0, x1, y0, y1)) => (x0.min(x), x1.max(x), y0.min(y), y1.max(y)),
        })
    });

    let Some((x_min, x_max, y_min, y_max)) = bounds else {
        return (0.0..1.0, 0.0..100.0);
    };

    let x_pad = if x_max > x_min { 0.0 } else { 1.0 };
    let y_pad = ((y_max - y_min) * 0.05).max(1.0);
    (
        (x_min - x_pad)..(x_max + x_pad),
        (y_min - y_pad)..(y_max + y_pad),
    )
}
