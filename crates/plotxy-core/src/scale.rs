// File: crates/plotxy-core/src/scale.rs
// Summary: Data-space to pixel-space transform for one series on one plot area.

use crate::geometry::RectI32;
use crate::range::Bounds;
use crate::types::Point;

/// Linear map from series data to plot-area pixels. Y is inverted so larger
/// values sit higher on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Pixels per data unit along X.
    pub scale_x: f64,
    /// Pixels per data unit along Y.
    pub scale_y: f64,
    /// Pixel X of `bounds.x.min` (left edge).
    pub origin_x: f64,
    /// Pixel Y of `bounds.y.min` (bottom edge).
    pub origin_y: f64,
    /// Effective range the transform was built for.
    pub bounds: Bounds,
}

impl Transform {
    /// Degenerate ranges scale as if they spanned one data unit.
    pub fn new(area: RectI32, bounds: Bounds) -> Self {
        Self {
            scale_x: area.width().max(0) as f64 / bounds.x.scale_span(),
            scale_y: area.height().max(0) as f64 / bounds.y.scale_span(),
            origin_x: area.left as f64,
            origin_y: area.bottom as f64,
            bounds,
        }
    }

    #[inline]
    pub fn x_to_px(&self, x: f64) -> f64 {
        self.origin_x + (x - self.bounds.x.min) * self.scale_x
    }
    #[inline]
    pub fn y_to_px(&self, y: f64) -> f64 {
        self.origin_y - (y - self.bounds.y.min) * self.scale_y
    }
    #[inline]
    pub fn to_px(&self, p: Point) -> (f64, f64) {
        (self.x_to_px(p.x), self.y_to_px(p.y))
    }

    /// Inverse of `to_px`. A zero-size axis maps every pixel back to its minimum.
    pub fn from_px(&self, px: f64, py: f64) -> Point {
        let x = if self.scale_x != 0.0 { self.bounds.x.min + (px - self.origin_x) / self.scale_x } else { self.bounds.x.min };
        let y = if self.scale_y != 0.0 { self.bounds.y.min + (self.origin_y - py) / self.scale_y } else { self.bounds.y.min };
        Point { x, y }
    }
}

/// Pixel position of `p` on `area` for `bounds`.
pub fn pixel_of(area: RectI32, bounds: Bounds, p: Point) -> (f64, f64) {
    Transform::new(area, bounds).to_px(p)
}
