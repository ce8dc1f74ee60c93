// File: crates/plotxy-core/src/theme.rs
// Summary: Light/Dark color presets for the plot frame, grid, marker line and default series palette.

use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    /// Plot-area outline.
    pub frame: Color,
    /// Graduation lines across the plot area.
    pub grid: Color,
    /// Vertical marker line.
    pub marker: Color,
    /// Colors handed to series created by the wide CSV loader, by index.
    pub palette: [Color; 8],
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            frame: Color::from_argb(255, 180, 180, 190),
            grid: Color::from_argb(255, 40, 40, 45),
            marker: Color::from_argb(255, 255, 230, 70),
            palette: [
                Color::from_argb(255, 64, 160, 255),
                Color::from_argb(255, 40, 200, 120),
                Color::from_argb(255, 220, 80, 80),
                Color::from_argb(255, 249, 226, 175),
                Color::from_argb(255, 203, 166, 247),
                Color::from_argb(255, 148, 226, 213),
                Color::from_argb(255, 250, 179, 135),
                Color::from_argb(255, 180, 190, 254),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 250, 250, 252),
            frame: Color::from_argb(255, 60, 60, 70),
            grid: Color::from_argb(255, 230, 230, 235),
            marker: Color::from_argb(255, 30, 120, 240),
            palette: [
                Color::from_argb(255, 32, 120, 200),
                Color::from_argb(255, 20, 160, 90),
                Color::from_argb(255, 200, 60, 60),
                Color::from_argb(255, 181, 137, 0),
                Color::from_argb(255, 108, 113, 196),
                Color::from_argb(255, 42, 161, 152),
                Color::from_argb(255, 203, 75, 22),
                Color::from_argb(255, 88, 110, 117),
            ],
        }
    }

    /// Palette color for the `index`-th series, cycling.
    pub fn series_color(&self, index: usize) -> Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
