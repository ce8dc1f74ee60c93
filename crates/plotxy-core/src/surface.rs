// File: crates/plotxy-core/src/surface.rs
// Summary: Rendering-surface trait the render pass draws through, plus a recording implementation.

use crate::geometry::RectI32;
use crate::layout::FontMetrics;
use crate::types::Color;

/// Pixel coordinate (x, y), origin top-left.
pub type Px = (f32, f32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FontFace {
    #[default]
    SansSerif,
    Monospace,
    Serif,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisFont {
    pub size: f32,
    pub face: FontFace,
}

impl Default for AxisFont {
    fn default() -> Self {
        Self { size: 10.0, face: FontFace::SansSerif }
    }
}

/// Drawing primitives provided by the host toolkit.
pub trait Surface {
    fn draw_line(&mut self, from: Px, to: Px, color: Color);
    /// Filled marker centered on `center`.
    fn draw_dot(&mut self, center: Px, radius: f32, color: Color);
    /// `at` is the left end of the text baseline.
    fn draw_text(&mut self, text: &str, at: Px, font: &AxisFont, color: Color);
    /// Outline only.
    fn draw_rect(&mut self, rect: RectI32, color: Color);
    fn font_metrics(&self, font: &AxisFont) -> FontMetrics;
    fn text_width(&self, text: &str, font: &AxisFont) -> f32;
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line { from: Px, to: Px, color: Color },
    Dot { center: Px, radius: f32, color: Color },
    Text { text: String, at: Px, size: f32, color: Color },
    Rect { rect: RectI32, color: Color },
}

/// Headless surface that keeps every primitive it is given.
/// Text is measured as `char_width` per character.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub metrics: FontMetrics,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self { Self::default() }

    pub fn with_metrics(metrics: FontMetrics) -> Self {
        Self { metrics, commands: Vec::new() }
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (Px, Px)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Line { from, to, .. } => Some((from, to)),
            _ => None,
        })
    }

    pub fn dots(&self) -> impl Iterator<Item = Px> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Dot { center, .. } => Some(center),
            _ => None,
        })
    }

    pub fn clear(&mut self) { self.commands.clear(); }
}

impl Surface for RecordingSurface {
    fn draw_line(&mut self, from: Px, to: Px, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }
    fn draw_dot(&mut self, center: Px, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Dot { center, radius, color });
    }
    fn draw_text(&mut self, text: &str, at: Px, font: &AxisFont, color: Color) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), at, size: font.size, color });
    }
    fn draw_rect(&mut self, rect: RectI32, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }
    fn font_metrics(&self, _font: &AxisFont) -> FontMetrics { self.metrics }
    fn text_width(&self, text: &str, _font: &AxisFont) -> f32 {
        (text.chars().count() as i32 * self.metrics.char_width) as f32
    }
}
