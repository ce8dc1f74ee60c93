// File: crates/plotxy-core/src/chart.rs
// Summary: PlotXY widget core: owns the series store and settings, runs layout and the render pass.

use std::path::Path;

use tracing::trace;

use crate::config::PlotConfig;
use crate::csv_io;
use crate::error::Result;
use crate::geometry::RectI32;
use crate::layout::{compute_area, FontMetrics};
use crate::render::{draw_axes, draw_series, draw_vline};
use crate::scale::Transform;
use crate::store::SeriesStore;
use crate::surface::Surface;
use crate::theme::Theme;
use crate::types::{Point, SeriesId};

pub struct PlotXY {
    store: SeriesStore,
    pub config: PlotConfig,
    pub theme: Theme,
    bounds: RectI32,
    area: RectI32,
}

impl PlotXY {
    /// Plot occupying `width` x `height` pixels at (`x`, `y`) with default settings.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::with_config(RectI32::from_xywh(x, y, width, height), PlotConfig::default())
    }

    pub fn with_config(bounds: RectI32, config: PlotConfig) -> Self {
        Self {
            store: SeriesStore::with_capacity(config.max_series),
            config,
            theme: Theme::default(),
            bounds,
            area: RectI32::default(),
        }
    }

    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    pub fn store(&self) -> &SeriesStore { &self.store }
    pub fn store_mut(&mut self) -> &mut SeriesStore { &mut self.store }

    /// Widget rectangle in host pixels.
    pub fn bounds(&self) -> RectI32 { self.bounds }

    pub fn resize(&mut self, bounds: RectI32) {
        self.bounds = bounds;
    }

    /// Plot area from the most recent layout pass.
    pub fn plot_area(&self) -> RectI32 { self.area }

    /// Compute the plot area, refresh every series' bounds and transform.
    pub fn layout(&mut self, metrics: FontMetrics) -> RectI32 {
        let area = compute_area(self.bounds, metrics, self.config.text_space_x, self.config.text_space_y);
        let zoom = self.config.zoom;
        let ids: Vec<SeriesId> = self.store.ids().collect();
        for id in ids {
            let Ok(b) = self.store.refresh_bounds(id, &zoom) else { continue };
            if let Ok(s) = self.store.get_mut(id) {
                s.set_transform(Transform::new(area, b));
            }
        }
        self.area = area;
        area
    }

    /// Full render pass onto `surface`.
    pub fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let metrics = surface.font_metrics(&self.config.axis_font);
        let area = self.layout(metrics);
        trace!(?area, series = self.store.len(), "render pass");

        surface.draw_rect(area, self.theme.frame);
        for s in self.store.iter().filter(|s| s.visible) {
            let Some(t) = s.transform() else { continue };
            draw_series(surface, s, t, &self.config);
            draw_axes(surface, s, t, area, metrics, &self.config, &self.theme);
        }

        let v = self.config.vline;
        if v.enabled {
            if let Ok(s) = self.store.get(v.series) {
                if s.visible {
                    draw_vline(surface, s, v.pos, area, metrics, &self.config, &self.theme);
                }
            }
        }
    }

    /// Point under the vertical marker, when it is enabled and valid.
    pub fn vline_point(&self) -> Option<Point> {
        let v = self.config.vline;
        if !v.enabled {
            return None;
        }
        self.store.read(v.series, v.pos).ok()
    }

    // ---- persistence ---------------------------------------------------------

    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<SeriesId> {
        csv_io::load(&mut self.store, path)
    }

    pub fn save(&self, id: SeriesId, path: impl AsRef<Path>) -> Result<()> {
        csv_io::save(&self.store, id, path)
    }

    /// Replaces all series; on failure nothing changes.
    pub fn load_xyyy(&mut self, path: impl AsRef<Path>) -> Result<Vec<SeriesId>> {
        csv_io::load_xyyy(&mut self.store, path, &self.theme)
    }

    pub fn save_xyyy(&self, path: impl AsRef<Path>) -> Result<()> {
        csv_io::save_xyyy(&self.store, path)
    }
}
