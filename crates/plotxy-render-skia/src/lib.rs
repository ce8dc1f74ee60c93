// File: crates/plotxy-render-skia/src/lib.rs
// Summary: Skia CPU raster implementation of the plotxy Surface, with PNG output.

use anyhow::Result;
use skia_safe as skia;
use tracing::debug;

use plotxy_core::{AxisFont, Color, FontMetrics, PlotXY, RectI32, Surface, Theme};

pub mod text;

pub use text::TextShaper;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub background: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            background: Color::from_argb(255, 18, 18, 20), // near-black
        }
    }
}

impl RenderOptions {
    /// Default size with the theme's background.
    pub fn themed(theme: &Theme) -> Self {
        Self { background: theme.background, ..Self::default() }
    }
}

#[inline]
fn sk(c: Color) -> skia::Color {
    skia::Color::new(c.0)
}

fn stroke(color: Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(sk(color));
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

/// Raster surface the render pass draws into.
pub struct SkiaSurface {
    surface: skia::Surface,
    shaper: TextShaper,
}

impl SkiaSurface {
    pub fn new(width: i32, height: i32, background: Color) -> Result<Self> {
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface {width}x{height}"))?;
        surface.canvas().clear(sk(background));
        Ok(Self { surface, shaper: TextShaper::new() })
    }

    /// Snapshot the canvas as PNG bytes.
    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Copy the canvas out as unpremultiplied RGBA8: `(pixels, width, height, row_bytes)`.
    pub fn read_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (self.surface.width(), self.surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("read_pixels failed for {w}x{h}");
        }
        Ok((pixels, w as u32, h as u32, row_bytes))
    }
}

impl Surface for SkiaSurface {
    fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), color: Color) {
        self.surface.canvas().draw_line(from, to, &stroke(color, 1.5));
    }

    fn draw_dot(&mut self, center: (f32, f32), radius: f32, color: Color) {
        let mut paint = skia::Paint::default();
        paint.set_color(sk(color));
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        self.surface.canvas().draw_circle(center, radius, &paint);
    }

    fn draw_text(&mut self, text: &str, at: (f32, f32), font: &AxisFont, color: Color) {
        let canvas = self.surface.canvas();
        self.shaper.draw_left(canvas, text, at.0, at.1, font, sk(color));
    }

    fn draw_rect(&mut self, rect: RectI32, color: Color) {
        let r = skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
        self.surface.canvas().draw_rect(r, &stroke(color, 1.0));
    }

    fn font_metrics(&self, font: &AxisFont) -> FontMetrics {
        self.shaper.metrics(font)
    }

    fn text_width(&self, text: &str, font: &AxisFont) -> f32 {
        self.shaper.measure_width(text, font)
    }
}

/// Render `plot` into an in-memory PNG.
pub fn render_to_png_bytes(plot: &mut PlotXY, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = SkiaSurface::new(opts.width, opts.height, opts.background)?;
    plot.draw(&mut surface);
    let bytes = surface.encode_png()?;
    debug!(width = opts.width, height = opts.height, bytes = bytes.len(), "encoded png");
    Ok(bytes)
}

/// Render `plot` into a raw RGBA8 buffer for hosts that blit pixels themselves.
pub fn render_to_rgba8(plot: &mut PlotXY, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = SkiaSurface::new(opts.width, opts.height, opts.background)?;
    plot.draw(&mut surface);
    surface.read_rgba8()
}

/// Render `plot` to a PNG file, creating parent directories as needed.
pub fn render_to_png(plot: &mut PlotXY, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
    let bytes = render_to_png_bytes(plot, opts)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}
