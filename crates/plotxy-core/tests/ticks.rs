// File: crates/plotxy-core/tests/ticks.rs
// Purpose: Tick enumeration anchored at the range minimum and per-axis label planning.

use plotxy_core::{plan_axis, tick_positions, AxisStyle, Range, TickMarks, ValueKind};

#[test]
fn ticks_zero_to_ten_step_two() {
    assert_eq!(tick_positions(Range::new(0.0, 10.0), 2.0), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
}

#[test]
fn ticks_anchor_at_range_minimum() {
    assert_eq!(tick_positions(Range::new(1.5, 7.0), 2.0), vec![1.5, 3.5, 5.5]);
}

#[test]
fn fractional_step_keeps_the_last_tick() {
    let ticks = tick_positions(Range::new(0.0, 1.0), 0.1);
    assert_eq!(ticks.len(), 11);
    assert!((ticks[10] - 1.0).abs() < 1e-12);
}

#[test]
fn non_positive_step_disables_ticks() {
    let r = Range::new(0.0, 10.0);
    assert!(tick_positions(r, 0.0).is_empty());
    assert!(tick_positions(r, -1.0).is_empty());
    assert!(tick_positions(r, f64::NAN).is_empty());
    // degenerate range still gets its single tick
    assert_eq!(tick_positions(Range::new(4.0, 4.0), 1.0), vec![4.0]);
}

fn style(marks: TickMarks, step: f64) -> AxisStyle {
    let mut st = AxisStyle::default();
    st.ticks = marks;
    st.step = step;
    st
}

#[test]
fn value_labels_use_axis_format() {
    let plan = plan_axis(&style(TickMarks::ON | TickMarks::VALUE, 5.0), Range::new(0.0, 10.0), "s");
    let labels: Vec<_> = plan.ticks.iter().map(|t| t.label.clone().unwrap()).collect();
    assert_eq!(labels, vec!["000.00", "005.00", "010.00"]);
    assert!(plan.draws_graduations());
    assert_eq!(plan.label, None);
    assert_eq!(plan.name, None);
}

#[test]
fn clock_labels() {
    let mut st = style(TickMarks::VALUE, 1800.0);
    st.kind = ValueKind::Hm;
    let plan = plan_axis(&st, Range::new(0.0, 3600.0), "");
    let labels: Vec<_> = plan.ticks.iter().filter_map(|t| t.label.as_deref()).collect();
    assert_eq!(labels, vec!["00:00", "00:30", "01:00"]);
    assert!(!plan.draws_graduations());
}

#[test]
fn graduations_without_values_have_no_labels() {
    let plan = plan_axis(&style(TickMarks::ON, 1.0), Range::new(0.0, 2.0), "");
    assert_eq!(plan.ticks.len(), 3);
    assert!(plan.ticks.iter().all(|t| t.label.is_none()));
}

#[test]
fn label_and_name_are_emitted_once() {
    let mut st = style(TickMarks::LABEL | TickMarks::NAME, 1.0);
    st.label = "volts".to_string();
    let plan = plan_axis(&st, Range::new(0.0, 5.0), "battery");
    assert!(plan.ticks.is_empty());
    assert_eq!(plan.label.as_deref(), Some("volts"));
    assert_eq!(plan.name.as_deref(), Some("battery"));

    let off = plan_axis(&style(TickMarks::OFF, 1.0), Range::new(0.0, 5.0), "battery");
    assert!(off.ticks.is_empty() && off.label.is_none() && off.name.is_none());
}
