//! CSV trace loader.
//!
//! # CSV format
//!
//! One row per position fix, in chronological order.  Timestamps are
//! RFC 3339; coordinates are decimal degrees.
//!
//! ```csv
//! timestamp,latitude,longitude
//! 2024-05-01T12:00:00Z,48.8460,2.3500
//! 2024-05-01T12:00:30Z,48.8473,2.3500
//! ```
//!
//! Equal consecutive timestamps are accepted; a timestamp earlier than its
//! predecessor is an error rather than being silently re-sorted.

use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use jt_core::Coordinate;

use crate::{Sample, TraceError, TraceResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SampleRecord {
    timestamp: DateTime<Utc>,
    latitude:  f64,
    longitude: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a trace from a CSV file.
pub fn load_trace_csv(path: &Path) -> TraceResult<Vec<Sample>> {
    let file = std::fs::File::open(path)?;
    load_trace_reader(file)
}

/// Like [`load_trace_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for traces embedded in
/// the binary.
pub fn load_trace_reader<R: Read>(reader: R) -> TraceResult<Vec<Sample>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut samples: Vec<Sample> = Vec::new();

    // Rows are numbered from 1, excluding the header.
    for (i, result) in csv_reader.deserialize::<SampleRecord>().enumerate() {
        let row = i + 1;
        let rec = result.map_err(|e| TraceError::Parse(format!("row {row}: {e}")))?;

        let position = Coordinate::new(rec.latitude, rec.longitude)
            .map_err(|e| TraceError::Parse(format!("row {row}: {e}")))?;

        if samples.last().is_some_and(|prev| rec.timestamp < prev.at) {
            return Err(TraceError::OutOfOrder { row, at: rec.timestamp });
        }
        samples.push(Sample::new(rec.timestamp, position));
    }

    log::debug!("loaded {} trace samples", samples.len());
    Ok(samples)
}
