// File: crates/plotxy-core/src/series.rs
// Summary: Series model: points, per-axis tick/label styling, scaling policy and draw style.
// Notes:
// - Points and bounds are private; they only change through the store so the
//   append/replace/clear rules hold.
// - `transform` is transient layout state, refreshed on every render pass.

use bitflags::bitflags;

use crate::error::Result;
use crate::format::{format_value, ValueFormat, ValueKind};
use crate::range::{Bounds, Range};
use crate::scale::Transform;
use crate::types::{Color, Point, SeriesId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DrawStyle {
    #[default]
    Dot,
    Line,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScaleMode {
    /// Bounds follow the data on every layout pass.
    #[default]
    Auto,
    /// Bounds stay as set by the caller.
    Fixed,
}

/// Which axis an accessor talks about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

bitflags! {
    /// What a tick on an axis draws. OR'd together.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct TickMarks: u8 {
        /// Graduation lines.
        const ON = 0x01;
        /// Axis label text, once per axis.
        const LABEL = 0x02;
        /// Value text at each tick.
        const VALUE = 0x04;
        /// Series title near its line.
        const NAME = 0x08;
    }
}

impl TickMarks {
    pub const OFF: TickMarks = TickMarks::empty();
}

/// Tick and label settings for one axis of one series.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisStyle {
    pub ticks: TickMarks,
    /// Data units between ticks; non-positive disables enumeration.
    pub step: f64,
    pub kind: ValueKind,
    pub label: String,
    format: ValueFormat,
}

impl AxisStyle {
    pub fn format(&self) -> ValueFormat { self.format }

    /// Validate and replace the format; on error the previous one stays.
    pub fn set_format(&mut self, width: usize, precision: usize) -> Result<()> {
        self.format = ValueFormat::new(width, precision)?;
        Ok(())
    }

    pub fn format_value(&self, v: f64) -> String {
        format_value(self.kind, &self.format, v)
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    id: SeriesId,
    pub title: String,
    pub color: Color,
    pub draw_style: DrawStyle,
    pub scale_mode: ScaleMode,
    pub visible: bool,
    pub x_axis: AxisStyle,
    pub y_axis: AxisStyle,
    bounds: Bounds,
    points: Vec<Point>,
    transform: Option<Transform>,
}

impl Series {
    pub(crate) fn new(id: SeriesId, bounds: Bounds, scale_mode: ScaleMode, color: Color, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            color,
            draw_style: DrawStyle::Dot,
            scale_mode,
            visible: true,
            x_axis: AxisStyle::default(),
            y_axis: AxisStyle::default(),
            bounds,
            points: Vec::new(),
            transform: None,
        }
    }

    pub fn id(&self) -> SeriesId { self.id }
    pub fn points(&self) -> &[Point] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Stored bounds: as set for Fixed, last computed for Auto.
    pub fn bounds(&self) -> Bounds { self.bounds }

    /// Transform from the most recent layout pass, if any.
    pub fn transform(&self) -> Option<&Transform> { self.transform.as_ref() }

    pub fn axis(&self, axis: Axis) -> &AxisStyle {
        match axis {
            Axis::X => &self.x_axis,
            Axis::Y => &self.y_axis,
        }
    }

    pub fn axis_mut(&mut self, axis: Axis) -> &mut AxisStyle {
        match axis {
            Axis::X => &mut self.x_axis,
            Axis::Y => &mut self.y_axis,
        }
    }

    pub(crate) fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    pub(crate) fn replace(&mut self, index: usize, p: Point) -> bool {
        match self.points.get_mut(index) {
            Some(slot) => { *slot = p; true }
            None => false,
        }
    }

    pub(crate) fn clear_points(&mut self) {
        self.points.clear();
        self.transform = None;
    }

    pub(crate) fn set_bounds(&mut self, x: Range, y: Range) {
        self.bounds = Bounds { x, y };
    }

    pub(crate) fn set_transform(&mut self, t: Transform) {
        self.transform = Some(t);
    }
}
