//! Replay observer trait for presentation and data collection.

use jt_core::Timestamp;
use jt_tracker::JourneyEvent;

use crate::Sample;

/// Callbacks invoked by [`Replay::run`][crate::Replay::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: arrival printer
///
/// ```rust,ignore
/// struct ArrivalPrinter;
///
/// impl TraceObserver for ArrivalPrinter {
///     fn on_event(&mut self, at: Timestamp, event: &JourneyEvent) {
///         if event.is_arrival() {
///             println!("arrived at {at}");
///         }
///     }
/// }
/// ```
pub trait TraceObserver {
    /// Called for every event, including the initial `Started`.
    fn on_event(&mut self, _at: Timestamp, _event: &JourneyEvent) {}

    /// Called for every sample the tracker accepted, with the event it
    /// produced (`None` once arrived).
    fn on_sample(&mut self, _sample: &Sample, _event: Option<&JourneyEvent>) {}

    /// Called once after the last sample, with that sample's time.
    fn on_replay_end(&mut self, _last_at: Timestamp) {}
}

/// A [`TraceObserver`] that does nothing.
pub struct NoopObserver;

impl TraceObserver for NoopObserver {}
