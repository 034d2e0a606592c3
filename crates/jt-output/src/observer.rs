//! `EventLogObserver<W>` — bridges `TraceObserver` to an `OutputWriter`.

use jt_core::Timestamp;
use jt_trace::TraceObserver;
use jt_tracker::JourneyEvent;

use crate::writer::OutputWriter;
use crate::{EventRow, OutputError, OutputResult};

/// A [`TraceObserver`] that writes every journey event to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `TraceObserver`
/// methods have no return value.  After the replay returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct EventLogObserver<W: OutputWriter> {
    writer:     W,
    rows:       usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> EventLogObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Take the stored write error (if any).  `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Rows successfully written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            log::error!("event log write failed: {e}");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> TraceObserver for EventLogObserver<W> {
    fn on_event(&mut self, at: Timestamp, event: &JourneyEvent) {
        let result = self.writer.write_event(&EventRow::from_event(at, event));
        if result.is_ok() {
            self.rows += 1;
        }
        self.store_err(result);
    }

    fn on_replay_end(&mut self, _last_at: Timestamp) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
