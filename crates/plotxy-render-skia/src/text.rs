// File: crates/plotxy-render-skia/src/text.rs
// Summary: Text shaping and measurement for axis text using Skia textlayout.

use plotxy_core::{AxisFont, FontFace, FontMetrics};
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use skia_safe as skia;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn families(face: FontFace) -> &'static [&'static str] {
        match face {
            FontFace::SansSerif => &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"],
            FontFace::Monospace => &["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"],
            FontFace::Serif => &["Times New Roman", "Georgia", "DejaVu Serif", "serif"],
        }
    }

    pub fn layout(&self, text: &str, font: &AxisFont, color: skia::Color) -> Paragraph {
        let mut ts = TextStyle::new();
        ts.set_font_size(font.size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(Self::families(font.face));

        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&ts);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, font: &AxisFont) -> f32 {
        let p = self.layout(text, font, skia::Color::from_argb(0, 0, 0, 0));
        // width of the longest line
        p.longest_line()
    }

    /// Line height and digit advance for `font`.
    pub fn metrics(&self, font: &AxisFont) -> FontMetrics {
        let p = self.layout("0", font, skia::Color::from_argb(0, 0, 0, 0));
        let line_height = p.height().ceil() as i32;
        let char_width = p.longest_line().ceil() as i32;
        // no usable font found: estimate from the point size
        FontMetrics {
            line_height: if line_height > 0 { line_height } else { (font.size * 1.2).ceil() as i32 },
            char_width: if char_width > 0 { char_width } else { (font.size * 0.6).ceil() as i32 },
        }
    }

    /// Draw with `(x, y)` as the left end of the baseline.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, font: &AxisFont, color: skia::Color) {
        let mut p = self.layout(text, font, color);
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (x, y - font.size * 0.8));
    }
}
