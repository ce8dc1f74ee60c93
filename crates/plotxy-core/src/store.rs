// File: crates/plotxy-core/src/store.rs
// Summary: Series storage keyed by stable slot id, with the id-checked accessor surface.
// Notes:
// - Ids are handed out lowest-free-first inside `[0, capacity)` and never
//   reassigned while occupied.
// - Every accessor on an unknown id returns `InvalidSeriesId` and changes nothing.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{PlotError, Result};
use crate::format::{ValueFormat, ValueKind};
use crate::range::{compute_range, Bounds, Range, ZoomMode};
use crate::series::{Axis, DrawStyle, ScaleMode, Series, TickMarks};
use crate::types::{Color, Point, SeriesId, MAX_SERIES};

#[derive(Clone, Debug)]
pub struct SeriesStore {
    capacity: usize,
    slots: BTreeMap<SeriesId, Series>,
}

impl Default for SeriesStore {
    fn default() -> Self { Self::with_capacity(MAX_SERIES) }
}

impl SeriesStore {
    pub fn new() -> Self { Self::default() }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity, slots: BTreeMap::new() }
    }

    pub fn capacity(&self) -> usize { self.capacity }
    pub fn len(&self) -> usize { self.slots.len() }
    pub fn is_empty(&self) -> bool { self.slots.is_empty() }

    /// Live ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = SeriesId> + '_ {
        self.slots.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.slots.values()
    }

    pub fn get(&self, id: SeriesId) -> Result<&Series> {
        self.slots.get(&id).ok_or(PlotError::InvalidSeriesId(id))
    }

    pub fn get_mut(&mut self, id: SeriesId) -> Result<&mut Series> {
        self.slots.get_mut(&id).ok_or(PlotError::InvalidSeriesId(id))
    }

    // ---- lifecycle -----------------------------------------------------------

    pub fn new_series(
        &mut self,
        x_min: f64,
        y_min: f64,
        x_max: f64,
        y_max: f64,
        scale_mode: ScaleMode,
        color: Color,
        title: &str,
    ) -> Result<SeriesId> {
        let id = (0..self.capacity)
            .map(SeriesId)
            .find(|id| !self.slots.contains_key(id))
            .ok_or(PlotError::SlotExhausted { capacity: self.capacity })?;
        let bounds = Bounds::new(x_min, y_min, x_max, y_max);
        self.slots.insert(id, Series::new(id, bounds, scale_mode, color, title));
        debug!(%id, ?scale_mode, title, "series created");
        Ok(id)
    }

    /// Auto-scaled, black, untitled series with zero bounds.
    pub fn new_default_series(&mut self) -> Result<SeriesId> {
        self.new_series(0.0, 0.0, 0.0, 0.0, ScaleMode::Auto, Color::BLACK, "")
    }

    pub fn used(&self, id: SeriesId) -> bool { self.slots.contains_key(&id) }

    /// Point count; 0 for an unbound id.
    pub fn datasize(&self, id: SeriesId) -> usize {
        self.slots.get(&id).map_or(0, Series::len)
    }

    /// Drop the points, keep the settings.
    pub fn clear(&mut self, id: SeriesId) -> Result<()> {
        self.get_mut(id)?.clear_points();
        Ok(())
    }

    pub fn clear_all(&mut self) {
        for s in self.slots.values_mut() {
            s.clear_points();
        }
    }

    /// Free the slot and its points.
    pub fn remove(&mut self, id: SeriesId) -> Result<()> {
        self.slots.remove(&id).ok_or(PlotError::InvalidSeriesId(id))?;
        debug!(%id, "series removed");
        Ok(())
    }

    pub fn remove_all(&mut self) {
        if !self.slots.is_empty() {
            debug!(count = self.slots.len(), "all series removed");
        }
        self.slots.clear();
    }

    // ---- points --------------------------------------------------------------

    pub fn add(&mut self, id: SeriesId, x: f64, y: f64) -> Result<()> {
        self.get_mut(id)?.push(Point { x, y });
        Ok(())
    }

    pub fn change(&mut self, id: SeriesId, index: usize, x: f64, y: f64) -> Result<()> {
        let s = self.get_mut(id)?;
        let len = s.len();
        if s.replace(index, Point { x, y }) {
            Ok(())
        } else {
            Err(PlotError::IndexOutOfRange { index, len })
        }
    }

    pub fn read(&self, id: SeriesId, index: usize) -> Result<Point> {
        let s = self.get(id)?;
        s.points()
            .get(index)
            .copied()
            .ok_or(PlotError::IndexOutOfRange { index, len: s.len() })
    }

    // ---- ranges --------------------------------------------------------------

    /// Store bounds for the series; only Fixed mode keeps them across layout.
    pub fn set_range(&mut self, id: SeriesId, x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<()> {
        self.get_mut(id)?.set_bounds(Range::new(x_min, x_max), Range::new(y_min, y_max));
        Ok(())
    }

    /// Bounds for the series' current mode, without writing anything back.
    pub fn range(&self, id: SeriesId) -> Result<Bounds> {
        Ok(compute_range(self.get(id)?, &ZoomMode::All))
    }

    /// Recompute the effective bounds under `zoom`. Auto results are stored on the series.
    pub fn refresh_bounds(&mut self, id: SeriesId, zoom: &ZoomMode) -> Result<Bounds> {
        let s = self.get_mut(id)?;
        let b = compute_range(s, zoom);
        if s.scale_mode == ScaleMode::Auto && matches!(zoom, ZoomMode::All) {
            s.set_bounds(b.x, b.y);
        }
        Ok(b)
    }

    // ---- series settings -----------------------------------------------------

    pub fn set_color(&mut self, id: SeriesId, color: Color) -> Result<()> {
        self.get_mut(id)?.color = color;
        Ok(())
    }

    pub fn color(&self, id: SeriesId) -> Result<Color> {
        Ok(self.get(id)?.color)
    }

    pub fn set_title(&mut self, id: SeriesId, title: &str) -> Result<()> {
        self.get_mut(id)?.title = title.to_string();
        Ok(())
    }

    pub fn title(&self, id: SeriesId) -> Result<&str> {
        Ok(self.get(id)?.title.as_str())
    }

    pub fn set_draw_style(&mut self, id: SeriesId, style: DrawStyle) -> Result<()> {
        self.get_mut(id)?.draw_style = style;
        Ok(())
    }

    pub fn draw_style(&self, id: SeriesId) -> Result<DrawStyle> {
        Ok(self.get(id)?.draw_style)
    }

    pub fn set_scale_mode(&mut self, id: SeriesId, mode: ScaleMode) -> Result<()> {
        self.get_mut(id)?.scale_mode = mode;
        Ok(())
    }

    pub fn scale_mode(&self, id: SeriesId) -> Result<ScaleMode> {
        Ok(self.get(id)?.scale_mode)
    }

    pub fn show(&mut self, id: SeriesId) -> Result<()> {
        self.get_mut(id)?.visible = true;
        Ok(())
    }

    pub fn hide(&mut self, id: SeriesId) -> Result<()> {
        self.get_mut(id)?.visible = false;
        Ok(())
    }

    pub fn visible(&self, id: SeriesId) -> Result<bool> {
        Ok(self.get(id)?.visible)
    }

    // ---- per-axis settings ---------------------------------------------------

    pub fn set_ticks(&mut self, id: SeriesId, axis: Axis, marks: TickMarks) -> Result<()> {
        self.get_mut(id)?.axis_mut(axis).ticks = marks;
        Ok(())
    }

    pub fn ticks(&self, id: SeriesId, axis: Axis) -> Result<TickMarks> {
        Ok(self.get(id)?.axis(axis).ticks)
    }

    pub fn set_tick_step(&mut self, id: SeriesId, axis: Axis, step: f64) -> Result<()> {
        self.get_mut(id)?.axis_mut(axis).step = step;
        Ok(())
    }

    pub fn tick_step(&self, id: SeriesId, axis: Axis) -> Result<f64> {
        Ok(self.get(id)?.axis(axis).step)
    }

    pub fn set_value_kind(&mut self, id: SeriesId, axis: Axis, kind: ValueKind) -> Result<()> {
        self.get_mut(id)?.axis_mut(axis).kind = kind;
        Ok(())
    }

    pub fn value_kind(&self, id: SeriesId, axis: Axis) -> Result<ValueKind> {
        Ok(self.get(id)?.axis(axis).kind)
    }

    /// Rejects `precision > width`; the previous format stays in that case.
    pub fn set_value_format(&mut self, id: SeriesId, axis: Axis, width: usize, precision: usize) -> Result<()> {
        self.get_mut(id)?.axis_mut(axis).set_format(width, precision)
    }

    pub fn value_format(&self, id: SeriesId, axis: Axis) -> Result<ValueFormat> {
        Ok(self.get(id)?.axis(axis).format())
    }

    pub fn set_axis_label(&mut self, id: SeriesId, axis: Axis, label: &str) -> Result<()> {
        self.get_mut(id)?.axis_mut(axis).label = label.to_string();
        Ok(())
    }

    pub fn axis_label(&self, id: SeriesId, axis: Axis) -> Result<&str> {
        Ok(self.get(id)?.axis(axis).label.as_str())
    }
}
