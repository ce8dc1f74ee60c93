// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV (wide X,Y1,Y2,... or plain X,Y), renders it to PNG and writes the data back out.
// Usage: plotxy-demo [input.csv] [value-kind for X, e.g. hms]
// Env: PLOTXY_THEME=dark|light, RUST_LOG for log filtering.

use anyhow::{Context, Result};
use plotxy_core::{theme, Axis, DrawStyle, PlotXY, SeriesId, TickMarks, ValueKind, VLine};
use plotxy_render_skia::{render_to_png, RenderOptions};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "plotxy_core=info,plotxy_demo=info,warn".into());
    fmt().with_env_filter(filter).with_target(true).init();
}

fn main() -> Result<()> {
    init_tracing();

    let input = std::env::args().nth(1).map(PathBuf::from);
    let x_kind = match std::env::args().nth(2) {
        Some(name) => ValueKind::parse(&name).with_context(|| format!("unknown value kind '{name}'"))?,
        None => ValueKind::Number,
    };

    let theme = theme::find(&std::env::var("PLOTXY_THEME").unwrap_or_default());
    let opts = RenderOptions::themed(&theme);
    let mut plot = PlotXY::new(0, 0, opts.width, opts.height);
    plot.theme = theme;

    let ids = match &input {
        Some(path) => load_any(&mut plot, path)?,
        None => {
            info!("no input given; using a synthetic day of samples");
            synthetic(&mut plot)?
        }
    };
    info!(series = ids.len(), "series ready");

    for (i, &id) in ids.iter().enumerate() {
        style_series(&mut plot, id, i == 0, x_kind)?;
    }
    if let Some(&first) = ids.first() {
        let n = plot.store().datasize(first);
        plot.config.vline = VLine { enabled: n > 0, series: first, pos: n / 2 };
    }

    let stem = input
        .as_deref()
        .and_then(Path::file_stem)
        .and_then(|s| s.to_str())
        .unwrap_or("synthetic")
        .to_string();
    let out = PathBuf::from("target/out").join(format!("plot_{stem}.png"));
    render_to_png(&mut plot, &opts, &out).with_context(|| format!("rendering {}", out.display()))?;
    println!("Wrote {}", out.display());

    let csv_out = out.with_extension("csv");
    plot.save_xyyy(&csv_out).with_context(|| format!("saving {}", csv_out.display()))?;
    println!("Wrote {}", csv_out.display());
    Ok(())
}

/// Try the wide form first; fall back to a single X,Y series.
fn load_any(plot: &mut PlotXY, path: &Path) -> Result<Vec<SeriesId>> {
    match plot.load_xyyy(path) {
        Ok(ids) if ids.len() > 1 => return Ok(ids),
        Ok(_) => info!("single Y column; reloading as plain X,Y"),
        Err(e) => warn!(error = %e, "wide load failed; trying plain X,Y"),
    }
    plot.store_mut().remove_all();
    let id = plot
        .load(path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    Ok(vec![id])
}

fn synthetic(plot: &mut PlotXY) -> Result<Vec<SeriesId>> {
    let colors = [plot.theme.series_color(0), plot.theme.series_color(1)];
    let store = plot.store_mut();
    let temp = store.new_series(0.0, 0.0, 0.0, 0.0, Default::default(), colors[0], "temperature")?;
    let load = store.new_series(0.0, 0.0, 0.0, 0.0, Default::default(), colors[1], "load")?;
    for i in 0..=96 {
        let t = i as f64 * 900.0; // every 15 minutes
        let phase = t / 86_400.0 * std::f64::consts::TAU;
        store.add(temp, t, 18.0 + 6.0 * (phase - 2.0).sin())?;
        if i % 3 == 0 {
            store.add(load, t, 40.0 + 25.0 * (phase * 2.0).cos().abs())?;
        }
    }
    store.set_axis_label(temp, Axis::X, "time of day")?;
    Ok(vec![temp, load])
}

fn style_series(plot: &mut PlotXY, id: SeriesId, primary: bool, x_kind: ValueKind) -> Result<()> {
    let store = plot.store_mut();
    store.set_draw_style(id, DrawStyle::Line)?;
    if !primary {
        store.set_ticks(id, Axis::X, TickMarks::NAME)?;
        return Ok(());
    }

    let b = store.range(id)?;
    store.set_value_kind(id, Axis::X, x_kind)?;
    store.set_ticks(id, Axis::X, TickMarks::ON | TickMarks::VALUE | TickMarks::LABEL | TickMarks::NAME)?;
    store.set_tick_step(id, Axis::X, nice_step(b.x.span()))?;
    store.set_ticks(id, Axis::Y, TickMarks::ON | TickMarks::VALUE | TickMarks::LABEL)?;
    store.set_tick_step(id, Axis::Y, nice_step(b.y.span()))?;
    store.set_value_format(id, Axis::Y, 8, 1)?;
    Ok(())
}

/// Roughly eight ticks on a 1/2/5 ladder.
fn nice_step(span: f64) -> f64 {
    if !(span > 0.0) || !span.is_finite() {
        return 1.0;
    }
    let raw = span / 8.0;
    let mag = 10f64.powf(raw.log10().floor());
    let unit = raw / mag;
    let nice = if unit <= 1.0 { 1.0 } else if unit <= 2.0 { 2.0 } else if unit <= 5.0 { 5.0 } else { 10.0 };
    nice * mag
}
