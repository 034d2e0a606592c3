//! `jt-output` — journey event logs.
//!
//! | Backend | Files created         |
//! |---------|-----------------------|
//! | CSV     | `journey_events.csv`  |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`EventLogObserver`], which implements `jt_trace::TraceObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use jt_output::{CsvWriter, EventLogObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = EventLogObserver::new(writer);
//! Replay::new(config).run(&samples, &mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::EventLogObserver;
pub use row::EventRow;
pub use writer::OutputWriter;
