use jt_core::{GeoError, Timestamp};
use jt_tracker::TrackerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("trace parse error: {0}")]
    Parse(String),

    #[error("row {row}: timestamp {at} precedes the previous sample")]
    OutOfOrder { row: usize, at: Timestamp },

    #[error("trace contains no samples")]
    Empty,

    #[error(transparent)]
    Geo(#[from] GeoError),

    #[error("tracker error: {0}")]
    Tracker(#[from] TrackerError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TraceResult<T> = Result<T, TraceError>;
