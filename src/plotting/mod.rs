mod chart;
pub mod styles;

pub use chart::{
    render_coverage_trends, TrendRenderer, TrendSeries, CHART_TITLE, X_AXIS_LABEL, Y_AXIS_LABEL,
};
pub use styles::{ChartStyle, ChartTheme};
