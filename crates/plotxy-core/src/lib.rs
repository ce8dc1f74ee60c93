// File: crates/plotxy-core/src/lib.rs
// Summary: Core library entry point; exports the series store, ranging, transforms, ticks and CSV codec.

pub mod axis;
pub mod chart;
pub mod config;
pub mod csv_io;
pub mod error;
pub mod format;
pub mod geometry;
pub mod layout;
pub mod range;
mod render;
pub mod scale;
pub mod series;
pub mod store;
pub mod surface;
pub mod theme;
pub mod types;

pub use axis::{plan_axis, tick_positions, AxisTicks, Tick};
pub use chart::PlotXY;
pub use config::{PlotConfig, VLine};
pub use error::{PlotError, Result};
pub use format::{format_value, ValueFormat, ValueKind, MAX_FORMAT_WIDTH};
pub use geometry::RectI32;
pub use layout::{compute_area, FontMetrics};
pub use range::{compute_range, Bounds, Range, ZoomMode};
pub use scale::{pixel_of, Transform};
pub use series::{Axis, AxisStyle, DrawStyle, ScaleMode, Series, TickMarks};
pub use store::SeriesStore;
pub use surface::{AxisFont, DrawCommand, FontFace, RecordingSurface, Surface};
pub use theme::Theme;
pub use types::{Color, Point, SeriesId, MAX_SERIES};
