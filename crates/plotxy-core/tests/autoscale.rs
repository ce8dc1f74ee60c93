// File: crates/plotxy-core/tests/autoscale.rs
// Purpose: Validate auto, fixed and zoom-override range computation.

use plotxy_core::{Bounds, Color, FontMetrics, PlotXY, Range, ScaleMode, SeriesStore, ZoomMode};

fn tight(points: &[(f64, f64)]) -> Bounds {
    let xs = points.iter().map(|p| p.0);
    let ys = points.iter().map(|p| p.1);
    Bounds {
        x: Range { min: xs.clone().fold(f64::INFINITY, f64::min), max: xs.fold(f64::NEG_INFINITY, f64::max) },
        y: Range { min: ys.clone().fold(f64::INFINITY, f64::min), max: ys.fold(f64::NEG_INFINITY, f64::max) },
    }
}

#[test]
fn auto_range_tracks_every_add() {
    let mut store = SeriesStore::new();
    let id = store.new_default_series().unwrap();
    let pts = [(3.0, -1.0), (-2.0, 4.5), (7.5, 0.0), (1.0, 9.0), (7.5, -3.25)];

    for i in 0..pts.len() {
        store.add(id, pts[i].0, pts[i].1).unwrap();
        let got = store.refresh_bounds(id, &ZoomMode::All).unwrap();
        assert_eq!(got, tight(&pts[..=i]), "after {} points", i + 1);
        // auto results are remembered on the series
        assert_eq!(store.get(id).unwrap().bounds(), got);
    }
}

#[test]
fn fixed_range_ignores_data() {
    let mut store = SeriesStore::new();
    let id = store.new_series(0.0, 0.0, 10.0, 5.0, ScaleMode::Fixed, Color::BLACK, "fixed").unwrap();
    for i in 0..50 {
        store.add(id, i as f64 * 3.0, -(i as f64)).unwrap();
    }
    assert_eq!(store.refresh_bounds(id, &ZoomMode::All).unwrap(), Bounds::new(0.0, 0.0, 10.0, 5.0));

    store.set_range(id, -1.0, -2.0, 3.0, 4.0).unwrap();
    store.add(id, 100.0, 100.0).unwrap();
    let b = store.refresh_bounds(id, &ZoomMode::All).unwrap();
    assert_eq!(b, Bounds { x: Range { min: -1.0, max: 3.0 }, y: Range { min: -2.0, max: 4.0 } });
    assert_eq!(store.range(id).unwrap(), b);
}

#[test]
fn reversed_fixed_bounds_are_ordered() {
    let mut store = SeriesStore::new();
    let id = store.new_series(10.0, 5.0, 0.0, -5.0, ScaleMode::Fixed, Color::BLACK, "").unwrap();
    let b = store.range(id).unwrap();
    assert!(b.x.min <= b.x.max && b.y.min <= b.y.max);
    assert_eq!(b, Bounds::new(0.0, -5.0, 10.0, 5.0));
}

#[test]
fn empty_auto_series_is_zero_width() {
    let mut store = SeriesStore::new();
    let id = store.new_default_series().unwrap();
    let b = store.refresh_bounds(id, &ZoomMode::All).unwrap();
    assert_eq!(b, Bounds::default());
    assert!(b.x.is_degenerate() && b.y.is_degenerate());
    assert_eq!(b.x.scale_span(), 1.0);
}

#[test]
fn selected_zoom_overrides_without_touching_series() {
    let mut store = SeriesStore::new();
    let auto = store.new_default_series().unwrap();
    let fixed = store.new_series(0.0, 0.0, 1.0, 1.0, ScaleMode::Fixed, Color::BLACK, "").unwrap();
    store.add(auto, 5.0, 5.0).unwrap();
    store.add(auto, 6.0, 8.0).unwrap();
    store.refresh_bounds(auto, &ZoomMode::All).unwrap();
    let remembered = store.get(auto).unwrap().bounds();

    let sel = Bounds::new(2.0, 3.0, 4.0, 9.0);
    let zoom = ZoomMode::Selected(sel);
    assert_eq!(store.refresh_bounds(auto, &zoom).unwrap(), sel);
    assert_eq!(store.refresh_bounds(fixed, &zoom).unwrap(), sel);
    assert_eq!(store.get(auto).unwrap().bounds(), remembered);
    assert_eq!(store.get(fixed).unwrap().bounds(), Bounds::new(0.0, 0.0, 1.0, 1.0));
}

#[test]
fn layout_pass_refreshes_auto_bounds() {
    let mut plot = PlotXY::new(0, 0, 400, 300);
    let id = plot.store_mut().new_default_series().unwrap();
    plot.store_mut().add(id, 1.0, 2.0).unwrap();
    plot.store_mut().add(id, -4.0, 8.0).unwrap();

    plot.layout(FontMetrics::default());
    let s = plot.store().get(id).unwrap();
    assert_eq!(s.bounds(), Bounds::new(-4.0, 2.0, 1.0, 8.0));
    assert_eq!(s.transform().unwrap().bounds, s.bounds());
}
