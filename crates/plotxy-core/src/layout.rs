// File: crates/plotxy-core/src/layout.rs
// Summary: Plot-area reservation: carves axis text margins out of the widget rectangle.

use crate::geometry::{clamp, RectI32};

/// Font measurements the surface reports for the axis font.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontMetrics {
    /// Distance between baselines, in pixels.
    pub line_height: i32,
    /// Average advance of a digit, in pixels.
    pub char_width: i32,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self { line_height: 12, char_width: 7 }
    }
}

/// Usable plot rectangle inside `widget`.
///
/// `text_space_x` columns on the left hold Y tick text, `text_space_y` rows at
/// the bottom hold X tick text. One line height is kept free at the top and the
/// right so the outermost labels are not clipped. The result always lies
/// inside `widget` and never has a negative size.
pub fn compute_area(widget: RectI32, metrics: FontMetrics, text_space_x: i32, text_space_y: i32) -> RectI32 {
    let pad = metrics.line_height.max(0);
    let w = RectI32 {
        left: widget.left,
        top: widget.top,
        right: widget.right.max(widget.left),
        bottom: widget.bottom.max(widget.top),
    };

    let left = clamp(w.left.saturating_add(text_space_x.max(0)), w.left, w.right);
    let top = clamp(w.top.saturating_add(pad), w.top, w.bottom);
    let right = clamp(w.right.saturating_sub(pad), left, w.right);
    let bottom = clamp(w.bottom.saturating_sub(text_space_y.max(0)), top, w.bottom);

    RectI32::from_ltrb(left, top, right, bottom)
}
