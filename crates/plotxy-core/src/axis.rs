// File: crates/plotxy-core/src/axis.rs
// Summary: Tick planning: positions anchored at the range minimum, plus per-tick value labels.

use crate::range::Range;
use crate::series::{AxisStyle, TickMarks};

/// Slack on the upper bound so accumulated float error does not drop the last tick.
const TICK_EPS: f64 = 1e-9;

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Present when `TickMarks::VALUE` is set.
    pub label: Option<String>,
}

/// Everything one axis of one series wants drawn.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisTicks {
    pub marks: TickMarks,
    pub ticks: Vec<Tick>,
    /// Axis label, once per axis (`TickMarks::LABEL`).
    pub label: Option<String>,
    /// Series title (`TickMarks::NAME`).
    pub name: Option<String>,
}

impl AxisTicks {
    pub fn draws_graduations(&self) -> bool { self.marks.contains(TickMarks::ON) }
}

/// Tick positions `lo + k*step` up to `hi`. Empty for a non-positive or
/// non-finite step or an unusable range. No cap is applied.
pub fn tick_positions(range: Range, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !step.is_finite() || !range.min.is_finite() || !range.max.is_finite() || range.max < range.min {
        return Vec::new();
    }
    let limit = range.max + step * TICK_EPS;
    let mut out = Vec::new();
    let mut k = 0u64;
    loop {
        let v = range.min + k as f64 * step;
        if v > limit {
            break;
        }
        out.push(v);
        k += 1;
    }
    out
}

/// Plan one axis from its style, effective range and the owning series' title.
pub fn plan_axis(style: &AxisStyle, range: Range, title: &str) -> AxisTicks {
    let marks = style.ticks;
    let ticks = if marks.intersects(TickMarks::ON | TickMarks::VALUE) {
        let with_value = marks.contains(TickMarks::VALUE);
        tick_positions(range, style.step)
            .into_iter()
            .map(|value| Tick { value, label: with_value.then(|| style.format_value(value)) })
            .collect()
    } else {
        Vec::new()
    };

    AxisTicks {
        marks,
        ticks,
        label: (marks.contains(TickMarks::LABEL) && !style.label.is_empty()).then(|| style.label.clone()),
        name: (marks.contains(TickMarks::NAME) && !title.is_empty()).then(|| title.to_string()),
    }
}
