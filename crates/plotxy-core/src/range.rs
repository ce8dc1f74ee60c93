// File: crates/plotxy-core/src/range.rs
// Summary: Effective axis ranges per series (fixed, auto-scanned, or zoom override).

use crate::series::{ScaleMode, Series};
use crate::types::Point;

/// Closed interval with `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// Build a range, swapping the ends if given reversed.
    pub fn new(a: f64, b: f64) -> Self {
        if b < a { Self { min: b, max: a } } else { Self { min: a, max: b } }
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    pub fn is_degenerate(&self) -> bool { !(self.span() > 0.0) }

    /// Span used for scaling: the real span, or one data unit when degenerate.
    pub fn scale_span(&self) -> f64 {
        let span = self.span();
        if span > 0.0 && span.is_finite() { span } else { 1.0 }
    }

    pub fn contains(&self, v: f64) -> bool { v >= self.min && v <= self.max }
}

/// X and Y ranges of one series.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Bounds {
    pub x: Range,
    pub y: Range,
}

impl Bounds {
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self { x: Range::new(x_min, x_max), y: Range::new(y_min, y_max) }
    }
}

/// Which bounds the layout pass uses.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum ZoomMode {
    /// Per-series bounds (fixed or auto).
    #[default]
    All,
    /// Externally selected region overriding every series.
    Selected(Bounds),
}

/// Tight bounds of `points`; an empty slice yields zero-width ranges at 0.
pub fn scan(points: &[Point]) -> Bounds {
    let Some((first, rest)) = points.split_first() else {
        return Bounds::default();
    };
    let (mut x_min, mut x_max, mut y_min, mut y_max) = (first.x, first.x, first.y, first.y);
    for p in rest {
        x_min = x_min.min(p.x);
        x_max = x_max.max(p.x);
        y_min = y_min.min(p.y);
        y_max = y_max.max(p.y);
    }
    Bounds { x: Range { min: x_min, max: x_max }, y: Range { min: y_min, max: y_max } }
}

/// Effective bounds of `series` under `zoom`.
pub fn compute_range(series: &Series, zoom: &ZoomMode) -> Bounds {
    match zoom {
        ZoomMode::Selected(sel) => *sel,
        ZoomMode::All => match series.scale_mode {
            ScaleMode::Fixed => series.bounds(),
            ScaleMode::Auto => scan(series.points()),
        },
    }
}
