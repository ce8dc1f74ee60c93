// File: crates/plotxy-render-skia/tests/smoke.rs
// Purpose: Basic render-to-PNG through the Skia surface, with and without axis text.

use plotxy_core::{Axis, DrawStyle, PlotXY, Surface, TickMarks, ValueKind};
use plotxy_render_skia::{render_to_png, render_to_png_bytes, RenderOptions, SkiaSurface};

fn sample_plot(opts: &RenderOptions) -> PlotXY {
    let mut plot = PlotXY::new(0, 0, opts.width, opts.height);
    let store = plot.store_mut();
    let id = store.new_default_series().expect("slot");
    for i in 0..=24 {
        let t = i as f64 * 3600.0;
        store.add(id, t, (i as f64 * 0.4).sin() * 5.0).expect("add");
    }
    store.set_draw_style(id, DrawStyle::Line).expect("style");
    store.set_title(id, "wave").expect("title");
    store.set_value_kind(id, Axis::X, ValueKind::Hm).expect("kind");
    store.set_ticks(id, Axis::X, TickMarks::ON | TickMarks::VALUE | TickMarks::NAME).expect("ticks");
    store.set_tick_step(id, Axis::X, 6.0 * 3600.0).expect("step");
    store.set_ticks(id, Axis::Y, TickMarks::ON | TickMarks::VALUE).expect("ticks");
    store.set_tick_step(id, Axis::Y, 2.5).expect("step");
    plot
}

#[test]
fn render_png_smoke() {
    let opts = RenderOptions { width: 320, height: 200, ..RenderOptions::default() };
    let mut plot = sample_plot(&opts);
    let bytes = render_to_png_bytes(&mut plot, &opts).expect("render");
    assert!(bytes.len() > 8);
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (320, 200));
}

#[test]
fn render_png_file() {
    let out = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("test_out/smoke.png");
    let _ = std::fs::remove_file(&out);
    let opts = RenderOptions { width: 240, height: 160, ..RenderOptions::default() };
    let mut plot = sample_plot(&opts);
    render_to_png(&mut plot, &opts, &out).expect("render to file");
    let meta = std::fs::metadata(&out).expect("png written");
    assert!(meta.len() > 0);
}

#[test]
fn surface_reports_usable_metrics() {
    let surface = SkiaSurface::new(64, 64, plotxy_core::Color::WHITE).expect("surface");
    let font = plotxy_core::AxisFont::default();
    let m = surface.font_metrics(&font);
    assert!(m.line_height > 0);
    assert!(m.char_width > 0);
    assert!(surface.text_width("", &font) <= surface.text_width("00:00:00", &font));
}
