// File: crates/plotxy-core/src/types.rs
// Summary: Shared types and constants (ids, points, colors, capacity defaults).

use std::fmt;

/// Default number of series slots per plot.
pub const MAX_SERIES: usize = 10;

/// Default pixels reserved left of the plot area for Y tick text.
pub const TEXT_SPACE_X: i32 = 60;
/// Default pixels reserved below the plot area for X tick text.
pub const TEXT_SPACE_Y: i32 = 40;

/// Stable identity of a series slot.
/// Contract: a live id is always `< capacity` of the owning store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeriesId(pub usize);

impl SeriesId {
    pub const fn index(self) -> usize { self.0 }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<usize> for SeriesId {
    fn from(v: usize) -> Self { Self(v) }
}

/// One sample. Replaced wholesale on update, never edited field by field.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self { Self { x, y } }
}

/// Opaque ARGB color handed through to the surface untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color::from_argb(255, 0, 0, 0);
    pub const WHITE: Color = Color::from_argb(255, 255, 255, 255);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }
    pub const fn a(self) -> u8 { (self.0 >> 24) as u8 }
    pub const fn r(self) -> u8 { (self.0 >> 16) as u8 }
    pub const fn g(self) -> u8 { (self.0 >> 8) as u8 }
    pub const fn b(self) -> u8 { self.0 as u8 }
}

impl Default for Color {
    fn default() -> Self { Color::BLACK }
}
