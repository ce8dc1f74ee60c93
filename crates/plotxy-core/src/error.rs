// File: crates/plotxy-core/src/error.rs
// Summary: Error taxonomy for store, formatting and CSV operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::SeriesId;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("series {0} is out of range or not in use")]
    InvalidSeriesId(SeriesId),

    #[error("no free series slot (capacity {capacity})")]
    SlotExhausted { capacity: usize },

    #[error("point index {index} out of range (series holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("fraction digits {precision} exceed total width {width}")]
    InvalidFormatSpec { width: usize, precision: usize },

    #[error("cannot open '{}'", path.display())]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed input in '{}': {reason}", path.display())]
    MalformedInput { path: PathBuf, reason: String },

    #[error("no series to save")]
    NoSeries,

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T, E = PlotError> = std::result::Result<T, E>;
