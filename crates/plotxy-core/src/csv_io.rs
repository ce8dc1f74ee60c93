// File: crates/plotxy-core/src/csv_io.rs
// Summary: CSV persistence: single-series `X,Y` files and wide `X,Y1,Y2,...` files with a title row.
// Notes:
// - Single-series loading is best-effort per row; wide loading parses the
//   whole file before touching the store and replaces everything or nothing.
// - Non-finite numbers (nan, inf) count as malformed cells.

use std::fs::File;
use std::io;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder, Trim, WriterBuilder};
use tracing::{debug, info, warn};

use crate::error::{PlotError, Result};
use crate::format::ValueFormat;
use crate::series::{Axis, ScaleMode, Series};
use crate::store::SeriesStore;
use crate::theme::Theme;
use crate::types::{Color, Point, SeriesId};

/// Rows of a single-series file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct XyRows {
    pub points: Vec<Point>,
    /// Records that did not hold two numbers.
    pub skipped: usize,
    /// Reading stopped early on an I/O error; `points` holds what came before.
    pub interrupted: bool,
}

/// Parsed wide file: one X column, `titles.len()` Y columns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WideTable {
    pub x_title: String,
    pub titles: Vec<String>,
    /// `(x, ys)` with `ys.len() == titles.len()`; `None` marks a missing cell.
    pub rows: Vec<(f64, Vec<Option<f64>>)>,
    pub skipped: usize,
}

fn reader_builder() -> ReaderBuilder {
    let mut b = ReaderBuilder::new();
    b.has_headers(false).flexible(true).trim(Trim::All);
    b
}

fn parse_num(field: &[u8]) -> Option<f64> {
    std::str::from_utf8(field).ok()?.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_pair(rec: &ByteRecord) -> Option<Point> {
    let x = parse_num(rec.get(0)?)?;
    let y = parse_num(rec.get(1)?)?;
    Some(Point { x, y })
}

/// Title cell text; bytes that are not UTF-8 become U+FFFD.
fn title(field: Option<&[u8]>) -> String {
    field.map(|f| String::from_utf8_lossy(f).into_owned()).unwrap_or_default()
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| PlotError::FileUnavailable { path: path.to_path_buf(), source })
}

fn create(path: &Path) -> Result<csv::Writer<File>> {
    let file = File::create(path).map_err(|source| PlotError::FileUnavailable { path: path.to_path_buf(), source })?;
    Ok(WriterBuilder::new().from_writer(file))
}

/// Read `X,Y` records, skipping any that are not two numbers.
pub fn parse_xy<R: io::Read>(input: R) -> XyRows {
    let mut out = XyRows::default();
    for (i, rec) in reader_builder().from_reader(input).byte_records().enumerate() {
        match rec {
            Ok(rec) => match parse_pair(&rec) {
                Some(p) => out.points.push(p),
                None => {
                    debug!(row = i + 1, "skipping malformed row");
                    out.skipped += 1;
                }
            },
            Err(e) if e.is_io_error() => {
                warn!(row = i + 1, error = %e, "read interrupted");
                out.interrupted = true;
                break;
            }
            Err(e) => {
                debug!(row = i + 1, error = %e, "skipping unreadable row");
                out.skipped += 1;
            }
        }
    }
    out
}

/// Read a wide file. Errors carry the reason the file is unusable.
/// The first record is always the header, whatever its encoding.
pub fn parse_xyyy<R: io::Read>(input: R) -> std::result::Result<WideTable, String> {
    let mut records = Vec::new();
    for rec in reader_builder().from_reader(input).byte_records() {
        match rec {
            Ok(rec) => records.push(rec),
            Err(e) if e.is_io_error() => return Err(format!("read error: {e}")),
            Err(e) => debug!(error = %e, "skipping unreadable row"),
        }
    }

    let Some((header, data)) = records.split_first() else {
        return Err("empty file".to_string());
    };
    let width = records.iter().map(ByteRecord::len).max().unwrap_or(0);
    let k = width.saturating_sub(1);
    if k == 0 {
        return Err("no Y columns".to_string());
    }

    let mut table = WideTable {
        x_title: title(header.get(0)),
        titles: (1..=k).map(|i| title(header.get(i))).collect(),
        ..WideTable::default()
    };
    for (i, rec) in data.iter().enumerate() {
        let Some(x) = rec.get(0).and_then(parse_num) else {
            debug!(row = i + 2, "skipping row without numeric X");
            table.skipped += 1;
            continue;
        };
        let ys = (1..=k).map(|c| rec.get(c).and_then(parse_num)).collect();
        table.rows.push((x, ys));
    }
    Ok(table)
}

/// Load a single-series file into a new Auto series titled after the file stem.
pub fn load(store: &mut SeriesStore, path: impl AsRef<Path>) -> Result<SeriesId> {
    let path = path.as_ref();
    let rows = parse_xy(open(path)?);
    if rows.points.is_empty() {
        return Err(PlotError::MalformedInput { path: path.to_path_buf(), reason: "no numeric X,Y rows".to_string() });
    }

    let title = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let id = store.new_series(0.0, 0.0, 0.0, 0.0, ScaleMode::Auto, Color::BLACK, &title)?;
    for p in &rows.points {
        store.add(id, p.x, p.y)?;
    }
    info!(path = %path.display(), %id, points = rows.points.len(), skipped = rows.skipped, "loaded series");
    Ok(id)
}

/// Write every point of `id` as `X,Y` with each axis's precision.
pub fn save(store: &SeriesStore, id: SeriesId, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let s = store.get(id)?;
    let (xf, yf) = (s.x_axis.format(), s.y_axis.format());

    let mut wtr = create(path)?;
    for p in s.points() {
        wtr.write_record([xf.plain(p.x), yf.plain(p.y)])?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    info!(path = %path.display(), %id, points = s.len(), "saved series");
    Ok(())
}

/// Replace every series with the columns of a wide file. Returns the new ids.
pub fn load_xyyy(store: &mut SeriesStore, path: impl AsRef<Path>, theme: &Theme) -> Result<Vec<SeriesId>> {
    let path = path.as_ref();
    let table = parse_xyyy(open(path)?)
        .map_err(|reason| PlotError::MalformedInput { path: path.to_path_buf(), reason })?;

    let k = table.titles.len();
    if k > store.capacity() {
        warn!(path = %path.display(), columns = k, capacity = store.capacity(), "too many Y columns");
        return Err(PlotError::SlotExhausted { capacity: store.capacity() });
    }

    store.remove_all();
    let mut ids = Vec::with_capacity(k);
    for (i, title) in table.titles.iter().enumerate() {
        let id = store.new_series(0.0, 0.0, 0.0, 0.0, ScaleMode::Auto, theme.series_color(i), title)?;
        store.set_axis_label(id, Axis::X, &table.x_title)?;
        store.set_axis_label(id, Axis::Y, title)?;
        ids.push(id);
    }
    for (x, ys) in &table.rows {
        for (&id, y) in ids.iter().zip(ys) {
            if let Some(y) = y {
                store.add(id, *x, *y)?;
            }
        }
    }
    info!(path = %path.display(), series = k, rows = table.rows.len(), skipped = table.skipped, "loaded wide file");
    Ok(ids)
}

fn same_x(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Write all series side by side, merging rows on X.
pub fn save_xyyy(store: &SeriesStore, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let series: Vec<&Series> = store.iter().collect();
    let Some(first) = series.first() else {
        return Err(PlotError::NoSeries);
    };

    let mut wtr = create(path)?;
    let x_title = if first.x_axis.label.is_empty() { "X" } else { first.x_axis.label.as_str() };
    let header: Vec<&str> = std::iter::once(x_title).chain(series.iter().map(|s| s.title.as_str())).collect();
    wtr.write_record(&header)?;

    let mut cursors = vec![0usize; series.len()];
    let mut rows = 0usize;
    loop {
        // f64::min skips NaN, so NaN heads only surface once nothing else is left
        let next = series
            .iter()
            .zip(&cursors)
            .filter_map(|(s, &c)| s.points().get(c).map(|p| p.x))
            .reduce(f64::min);
        let Some(x) = next else { break };

        let mut x_format: Option<ValueFormat> = None;
        let mut cells = Vec::with_capacity(series.len());
        for (s, c) in series.iter().zip(cursors.iter_mut()) {
            match s.points().get(*c) {
                Some(p) if same_x(p.x, x) => {
                    x_format.get_or_insert(s.x_axis.format());
                    cells.push(s.y_axis.format().plain(p.y));
                    *c += 1;
                }
                _ => cells.push(String::new()),
            }
        }
        let x_cell = x_format.unwrap_or_default().plain(x);
        wtr.write_record(std::iter::once(x_cell).chain(cells))?;
        rows += 1;
    }
    wtr.flush().map_err(csv::Error::from)?;
    info!(path = %path.display(), series = series.len(), rows, "saved wide file");
    Ok(())
}
