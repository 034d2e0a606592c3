//! `jt-trace` — location sample traces and replay.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`sample`]   | `Sample` — one timestamped position fix                      |
//! | [`loader`]   | CSV trace loading (`timestamp,latitude,longitude`)           |
//! | [`synth`]    | `StraightLineTrace` — synthetic great-circle walk            |
//! | [`observer`] | `TraceObserver` callbacks, `NoopObserver`                    |
//! | [`replay`]   | `Replay` — drives a `JourneyTracker` over a trace            |
//! | [`error`]    | `TraceError`, `TraceResult<T>`                               |
//!
//! A replay plays the part of the embedding application: it owns the
//! "timer" (the trace), calls `observe()` serially, and hands every event
//! to an observer.

pub mod error;
pub mod loader;
pub mod observer;
pub mod replay;
pub mod sample;
pub mod synth;

#[cfg(test)]
mod tests;

pub use error::{TraceError, TraceResult};
pub use loader::{load_trace_csv, load_trace_reader};
pub use observer::{NoopObserver, TraceObserver};
pub use replay::{Replay, ReplaySummary};
pub use sample::Sample;
pub use synth::StraightLineTrace;
