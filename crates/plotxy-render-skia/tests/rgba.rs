// File: crates/plotxy-render-skia/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use plotxy_core::{DrawStyle, PlotXY, Theme};
use plotxy_render_skia::{render_to_rgba8, RenderOptions};

#[test]
fn render_rgba8_buffer() {
    let theme = Theme::light();
    let opts = RenderOptions { width: 200, height: 120, ..RenderOptions::themed(&theme) };
    let mut plot = PlotXY::new(0, 0, opts.width, opts.height);
    plot.theme = theme;
    let id = plot.store_mut().new_default_series().expect("slot");
    plot.store_mut().add(id, 0.0, 0.0).expect("add");
    plot.store_mut().add(id, 4.0, 4.0).expect("add");
    plot.store_mut().set_draw_style(id, DrawStyle::Line).expect("style");

    let (px, w, h, stride) = render_to_rgba8(&mut plot, &opts).expect("rgba render");
    assert_eq!((w, h), (200, 120));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // top-left pixel sits outside the plot area: opaque background
    let bg = theme.background;
    assert_eq!(&px[..4], &[bg.r(), bg.g(), bg.b(), 255]);
}
