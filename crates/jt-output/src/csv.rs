//! CSV output backend.
//!
//! Creates `journey_events.csv` in the configured output directory.
//! Timestamps are RFC 3339; absent values are written as empty fields.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EventRow, OutputResult};

pub const EVENTS_FILE: &str = "journey_events.csv";

/// Writes journey events to a single CSV file.
pub struct CsvWriter {
    events:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) `journey_events.csv` in `dir` and write the header.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join(EVENTS_FILE))?;
        events.write_record(["timestamp", "kind", "percent", "remaining_m", "remaining_minutes", "estimated_arrival"])?;

        Ok(Self { events, finished: false })
    }
}

fn opt<T: ToString>(v: Option<T>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.timestamp.to_rfc3339(),
            row.kind.to_string(),
            opt(row.percent.map(|p| format!("{p:.2}"))),
            format!("{:.1}", row.remaining_m),
            opt(row.remaining_minutes),
            opt(row.estimated_arrival.map(|t| t.to_rfc3339())),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        Ok(())
    }
}
