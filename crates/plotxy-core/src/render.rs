// File: crates/plotxy-core/src/render.rs
// Summary: Render-pass helpers: series geometry, graduations and labels, and the vertical marker.

use crate::axis::{plan_axis, AxisTicks};
use crate::config::PlotConfig;
use crate::geometry::RectI32;
use crate::layout::FontMetrics;
use crate::scale::Transform;
use crate::series::{DrawStyle, Series};
use crate::surface::{Px, Surface};
use crate::theme::Theme;

// ---- helpers ----------------------------------------------------------------

#[inline]
fn px(t: &Transform, x: f64, y: f64) -> Px {
    (t.x_to_px(x) as f32, t.y_to_px(y) as f32)
}

pub(crate) fn draw_series<S: Surface + ?Sized>(surface: &mut S, series: &Series, t: &Transform, cfg: &PlotConfig) {
    let pts: Vec<Px> = series.points().iter().map(|p| px(t, p.x, p.y)).collect();
    match series.draw_style {
        DrawStyle::Line if pts.len() >= 2 => {
            for w in pts.windows(2) {
                surface.draw_line(w[0], w[1], series.color);
            }
        }
        // a lone point in line mode still shows up as a dot
        DrawStyle::Line | DrawStyle::Dot => {
            for &p in &pts {
                surface.draw_dot(p, cfg.dot_radius, series.color);
            }
        }
    }
}

pub(crate) fn draw_axes<S: Surface + ?Sized>(
    surface: &mut S,
    series: &Series,
    t: &Transform,
    area: RectI32,
    metrics: FontMetrics,
    cfg: &PlotConfig,
    theme: &Theme,
) {
    let x_plan = plan_axis(&series.x_axis, t.bounds.x, &series.title);
    let y_plan = plan_axis(&series.y_axis, t.bounds.y, &series.title);
    draw_x_ticks(surface, &x_plan, series, t, area, metrics, cfg, theme);
    draw_y_ticks(surface, &y_plan, series, t, area, metrics, cfg, theme);

    let font = &cfg.axis_font;
    let lh = metrics.line_height as f32;
    let (l, t_px, r, b) = (area.left as f32, area.top as f32, area.right as f32, area.bottom as f32);

    if let Some(label) = &x_plan.label {
        let w = surface.text_width(label, font);
        surface.draw_text(label, (r - w, b + cfg.tick_len + 2.0 * lh), font, series.color);
    }
    if let Some(label) = &y_plan.label {
        surface.draw_text(label, (l + 2.0, t_px + lh), font, series.color);
    }
    if let Some(name) = x_plan.name.as_ref().or(y_plan.name.as_ref()) {
        if let Some(last) = series.points().last() {
            let (x, y) = px(t, last.x, last.y);
            surface.draw_text(name, (x + 4.0, y - 4.0), font, series.color);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_x_ticks<S: Surface + ?Sized>(
    surface: &mut S,
    plan: &AxisTicks,
    series: &Series,
    t: &Transform,
    area: RectI32,
    metrics: FontMetrics,
    cfg: &PlotConfig,
    theme: &Theme,
) {
    let (top, bottom) = (area.top as f32, area.bottom as f32);
    for tick in &plan.ticks {
        let x = t.x_to_px(tick.value) as f32;
        if plan.draws_graduations() {
            surface.draw_line((x, top), (x, bottom), theme.grid);
            surface.draw_line((x, bottom), (x, bottom + cfg.tick_len), series.color);
        }
        if let Some(label) = &tick.label {
            let label = label.trim_start();
            let w = surface.text_width(label, &cfg.axis_font);
            let at = (x - w * 0.5, bottom + cfg.tick_len + metrics.line_height as f32);
            surface.draw_text(label, at, &cfg.axis_font, series.color);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_y_ticks<S: Surface + ?Sized>(
    surface: &mut S,
    plan: &AxisTicks,
    series: &Series,
    t: &Transform,
    area: RectI32,
    metrics: FontMetrics,
    cfg: &PlotConfig,
    theme: &Theme,
) {
    let (left, right) = (area.left as f32, area.right as f32);
    for tick in &plan.ticks {
        let y = t.y_to_px(tick.value) as f32;
        if plan.draws_graduations() {
            surface.draw_line((left, y), (right, y), theme.grid);
            surface.draw_line((left - cfg.tick_len, y), (left, y), series.color);
        }
        if let Some(label) = &tick.label {
            let label = label.trim_start();
            let w = surface.text_width(label, &cfg.axis_font);
            // right-aligned against the stub, baseline roughly centered on the tick
            let at = (left - cfg.tick_len - 2.0 - w, y + metrics.line_height as f32 * 0.35);
            surface.draw_text(label, at, &cfg.axis_font, series.color);
        }
    }
}

/// Vertical line through the selected point plus an enlarged dot on it.
pub(crate) fn draw_vline<S: Surface + ?Sized>(
    surface: &mut S,
    series: &Series,
    pos: usize,
    area: RectI32,
    metrics: FontMetrics,
    cfg: &PlotConfig,
    theme: &Theme,
) {
    let (Some(t), Some(p)) = (series.transform(), series.points().get(pos)) else { return };
    let (x, y) = px(t, p.x, p.y);
    surface.draw_line((x, area.top as f32), (x, area.bottom as f32), theme.marker);
    surface.draw_dot((x, y), cfg.dot_radius * 2.0, series.color);

    let text = format!(
        "{}, {}",
        series.x_axis.format_value(p.x).trim(),
        series.y_axis.format_value(p.y).trim()
    );
    surface.draw_text(&text, (x + 4.0, area.top as f32 + metrics.line_height as f32), &cfg.axis_font, theme.marker);
}
