// File: crates/plotxy-core/src/config.rs
// Summary: Plot-wide settings: axis font, text reservations, marker line, zoom and capacity.

use crate::range::ZoomMode;
use crate::surface::AxisFont;
use crate::types::{SeriesId, MAX_SERIES, TEXT_SPACE_X, TEXT_SPACE_Y};

/// Vertical marker through one point of one series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VLine {
    pub enabled: bool,
    pub series: SeriesId,
    /// Index into the series' points.
    pub pos: usize,
}

impl Default for VLine {
    fn default() -> Self {
        Self { enabled: false, series: SeriesId(0), pos: 0 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlotConfig {
    pub axis_font: AxisFont,
    /// Pixels reserved left of the plot area for Y tick text.
    pub text_space_x: i32,
    /// Pixels reserved below the plot area for X tick text.
    pub text_space_y: i32,
    pub dot_radius: f32,
    /// Length of the graduation stub outside the plot area.
    pub tick_len: f32,
    pub zoom: ZoomMode,
    pub vline: VLine,
    /// Series slots; only read when the plot is created.
    pub max_series: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            axis_font: AxisFont::default(),
            text_space_x: TEXT_SPACE_X,
            text_space_y: TEXT_SPACE_Y,
            dot_radius: 2.0,
            tick_len: 4.0,
            zoom: ZoomMode::All,
            vline: VLine::default(),
            max_series: MAX_SERIES,
        }
    }
}
