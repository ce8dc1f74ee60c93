// File: crates/plotxy-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic small plots to PNG bytes; no axis text, so fonts do not matter.
// - Always decodes the render and checks its size and that something besides background was drawn.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and skips the pixel comparison. Golden comparison is opt-in:
//   no PNGs are checked in, so it only asserts once blessed on a machine with a stable font/raster setup.

use plotxy_core::{Axis, Bounds, DrawStyle, PlotXY, ScaleMode, TickMarks, ZoomMode};
use plotxy_render_skia::{render_to_png_bytes, RenderOptions};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

const WIDTH: i32 = 320;
const HEIGHT: i32 = 200;

/// Decodes the render and checks it is not a blank canvas.
fn check_drawn(bytes: &[u8]) {
    let img = image::load_from_memory(bytes).expect("decode png").to_rgba8();
    assert_eq!((img.width(), img.height()), (WIDTH as u32, HEIGHT as u32));
    let background = *img.get_pixel(0, 0);
    let inked = img.pixels().filter(|p| **p != background).count();
    // frame alone is a few hundred pixels
    assert!(inked > 500, "only {inked} non-background pixels");
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    check_drawn(bytes);
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render<F: FnOnce(&mut PlotXY)>(build: F) -> Vec<u8> {
    let opts = RenderOptions { width: WIDTH, height: HEIGHT, ..RenderOptions::default() };
    let mut plot = PlotXY::new(0, 0, opts.width, opts.height);
    build(&mut plot);
    render_to_png_bytes(&mut plot, &opts).expect("render")
}

#[test]
fn golden_line_series() {
    let bytes = render(|plot| {
        let store = plot.store_mut();
        let id = store.new_default_series().expect("slot");
        for (x, y) in [(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.5), (4.0, 1.0)] {
            store.add(id, x, y).expect("add");
        }
        store.set_draw_style(id, DrawStyle::Line).expect("style");
        store.set_ticks(id, Axis::X, TickMarks::ON).expect("ticks");
        store.set_tick_step(id, Axis::X, 1.0).expect("step");
        store.set_ticks(id, Axis::Y, TickMarks::ON).expect("ticks");
        store.set_tick_step(id, Axis::Y, 0.5).expect("step");
    });
    write_or_compare("line_series.png", &bytes);
}

#[test]
fn golden_fixed_dots() {
    let bytes = render(|plot| {
        let color = plot.theme.series_color(2);
        let store = plot.store_mut();
        let id = store.new_series(-1.0, -1.0, 9.0, 9.0, ScaleMode::Fixed, color, "dots").expect("slot");
        for i in 0..8 {
            store.add(id, i as f64, (i * i % 7) as f64).expect("add");
        }
        store.set_ticks(id, Axis::Y, TickMarks::ON).expect("ticks");
        store.set_tick_step(id, Axis::Y, 3.0).expect("step");
    });
    write_or_compare("fixed_dots.png", &bytes);
}

#[test]
fn golden_zoomed_two_series() {
    let bytes = render(|plot| {
        let colors = [plot.theme.series_color(0), plot.theme.series_color(1)];
        let store = plot.store_mut();
        let a = store.new_series(0.0, 0.0, 0.0, 0.0, ScaleMode::Auto, colors[0], "a").expect("slot");
        let b = store.new_series(0.0, 0.0, 0.0, 0.0, ScaleMode::Auto, colors[1], "b").expect("slot");
        for i in 0..40 {
            let x = i as f64 * 0.25;
            store.add(a, x, x.sin()).expect("add");
            store.add(b, x, x.cos() * 0.5).expect("add");
        }
        store.set_draw_style(a, DrawStyle::Line).expect("style");
        plot.config.zoom = ZoomMode::Selected(Bounds::new(2.0, -1.0, 6.0, 1.0));
    });
    write_or_compare("zoomed_two_series.png", &bytes);
}
