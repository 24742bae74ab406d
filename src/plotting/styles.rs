use plotters::style::RGBAColor;

/// Chart theme configuration
#[derive(Clone, Copy, Debug)]
pub struct ChartTheme {
    pub background_color: RGBAColor,
    pub text_color: RGBAColor,
    pub grid_color: RGBAColor,
    pub axis_color: RGBAColor,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background_color: RGBAColor(255, 255, 255, 1.0),
            text_color: RGBAColor(0, 0, 0, 0.85),
            grid_color: RGBAColor(0, 0, 0, 0.15),
            axis_color: RGBAColor(0, 0, 0, 0.8),
        }
    }
}

/// Chart style configuration
#[derive(Clone, Copy, Debug)]
pub struct ChartStyle {
    /// Image size in pixels
    pub width: u32,
    pub height: u32,
    pub line_width: u32,
    pub marker_size: u32,
    pub font_size: u32,
    pub title_font_size: u32,
    pub margin: u32,
    pub label_area_size: u32,
    /// Upper bound on date ticks along the x axis
    pub x_labels: usize,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            line_width: 2,
            marker_size: 4,
            font_size: 15,
            title_font_size: 24,
            margin: 15,
            label_area_size: 60,
            x_labels: 8,
        }
    }
}
