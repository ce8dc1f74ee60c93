// File: crates/plotxy-core/src/format.rs
// Summary: Axis value formatting: fixed-point numbers and clock/duration encodings.
// Notes:
// - Rounding is half-away-from-zero on the decimal-scaled value, applied once
//   before any decomposition so carries propagate (59.999 -> 01:00.00).
// - Clock kinds read the raw value as seconds; hours never wrap at 24.

use crate::error::{PlotError, Result};

/// Sub-second digits beyond nanoseconds are dropped by the clock kinds.
const MAX_CLOCK_DIGITS: usize = 9;

/// Widest accepted `ValueFormat`; larger widths are rejected by `ValueFormat::new`.
pub const MAX_FORMAT_WIDTH: usize = 64;

/// How a raw axis value is rendered as text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ValueKind {
    /// Fixed-point decimal.
    #[default]
    Number,
    /// `SS`
    Seconds,
    /// `MM:SS`
    MinSec,
    /// `HH:MM:SS`
    Hms,
    /// `HH:MM`
    Hm,
    /// Total hours as a fraction, `H.hh`.
    Hfrac,
    /// Total seconds as a fraction, `S.ss`.
    Sfrac,
    /// `MM:SS.ff`
    MinSecFrac,
    /// `HH:MM:SS.ff`
    HmsFrac,
}

impl ValueKind {
    pub const ALL: [ValueKind; 9] = [
        ValueKind::Number,
        ValueKind::Seconds,
        ValueKind::MinSec,
        ValueKind::Hms,
        ValueKind::Hm,
        ValueKind::Hfrac,
        ValueKind::Sfrac,
        ValueKind::MinSecFrac,
        ValueKind::HmsFrac,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Number => "number",
            ValueKind::Seconds => "s",
            ValueKind::MinSec => "ms",
            ValueKind::Hms => "hms",
            ValueKind::Hm => "hm",
            ValueKind::Hfrac => "hfrac",
            ValueKind::Sfrac => "sfrac",
            ValueKind::MinSecFrac => "msfrac",
            ValueKind::HmsFrac => "hmsfrac",
        }
    }

    /// Look a kind up by its short name (case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name().eq_ignore_ascii_case(name.trim()))
    }

    /// True for kinds that print a sub-second part.
    pub fn has_fraction(self) -> bool {
        matches!(self, ValueKind::Sfrac | ValueKind::MinSecFrac | ValueKind::HmsFrac)
    }
}

/// `(width, precision)` pair; `precision <= width <= MAX_FORMAT_WIDTH` is
/// guaranteed by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValueFormat {
    width: usize,
    precision: usize,
}

impl ValueFormat {
    pub fn new(width: usize, precision: usize) -> Result<Self> {
        if precision > width || width > MAX_FORMAT_WIDTH {
            return Err(PlotError::InvalidFormatSpec { width, precision });
        }
        Ok(Self { width, precision })
    }

    pub const fn width(&self) -> usize { self.width }
    pub const fn precision(&self) -> usize { self.precision }

    /// Fixed-point text zero-padded to `width`, sign first (`-003.14`).
    pub fn padded(&self, v: f64) -> String {
        if !v.is_finite() {
            return format!("{v:>w$}", w = self.width);
        }
        format!("{:0w$.p$}", round_to(v, self.precision), w = self.width, p = self.precision)
    }

    /// Fixed-point text without padding (used for CSV output).
    pub fn plain(&self, v: f64) -> String {
        fixed(v, self.precision)
    }
}

impl Default for ValueFormat {
    fn default() -> Self {
        Self { width: 6, precision: 2 }
    }
}

/// Which clock components a kind prints.
#[derive(Clone, Copy)]
enum Fields {
    Sec,
    MinSec,
    HourMinSec,
    HourMin,
}

/// Render `v` according to `kind`, using `format` for width and digits.
pub fn format_value(kind: ValueKind, format: &ValueFormat, v: f64) -> String {
    let p = format.precision();
    match kind {
        ValueKind::Number => format.padded(v),
        ValueKind::Hfrac => fixed(v / 3600.0, p),
        ValueKind::Sfrac => fixed(v, p),
        ValueKind::Seconds => clock(Fields::Sec, 0, v),
        ValueKind::MinSec => clock(Fields::MinSec, 0, v),
        ValueKind::Hms => clock(Fields::HourMinSec, 0, v),
        ValueKind::Hm => clock(Fields::HourMin, 0, v),
        ValueKind::MinSecFrac => clock(Fields::MinSec, p, v),
        ValueKind::HmsFrac => clock(Fields::HourMinSec, p, v),
    }
}

/// Half-away-from-zero rounding at `precision` decimals; never returns `-0.0`.
fn round_to(v: f64, precision: usize) -> f64 {
    let factor = 10f64.powi(precision as i32);
    let scaled = (v * factor).round();
    let r = if scaled.is_finite() && factor.is_finite() { scaled / factor } else { v };
    // drop the sign of negative zero
    if r == 0.0 { 0.0 } else { r }
}

/// Round half away from zero at `precision` decimals and print exactly that many.
/// Precision is capped at `MAX_FORMAT_WIDTH`.
pub fn fixed(v: f64, precision: usize) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let precision = precision.min(MAX_FORMAT_WIDTH);
    format!("{:.*}", precision, round_to(v, precision))
}

fn clock(fields: Fields, precision: usize, v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let digits = precision.min(MAX_CLOCK_DIGITS);
    let unit = 10u64.pow(digits as u32);
    let scaled = (v.abs() * unit as f64).round();
    if scaled >= u64::MAX as f64 {
        return fixed(v, digits);
    }
    let total = scaled as u64;
    let secs = total / unit;
    let frac = total % unit;

    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    let frac = if digits > 0 { format!(".{frac:0digits$}") } else { String::new() };

    let body = match fields {
        Fields::Sec => format!("{s:02}{frac}"),
        Fields::MinSec => format!("{m:02}:{s:02}{frac}"),
        Fields::HourMinSec => format!("{h:02}:{m:02}:{s:02}{frac}"),
        Fields::HourMin => format!("{h:02}:{m:02}{frac}"),
    };
    if v < 0.0 && total > 0 {
        format!("-{body}")
    } else {
        body
    }
}
