//! Replay a trace through a fresh [`JourneyTracker`].

use std::fmt;

use jt_core::Timestamp;
use jt_tracker::{JourneyConfig, JourneyTracker};
use log::{info, warn};

use crate::{Sample, TraceError, TraceObserver, TraceResult};

/// Counts collected by [`Replay::run`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReplaySummary {
    /// Samples accepted by the tracker (including ignored post-arrival ones).
    pub samples:    usize,
    /// Samples skipped because their coordinates were out of range.
    pub rejected:   usize,
    /// Events emitted, including `Started`.
    pub events:     usize,
    /// Time of the sample that produced `Arrived`, if any.
    pub arrived_at: Option<Timestamp>,
}

impl fmt::Display for ReplaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} samples ({} rejected), {} events, ", self.samples, self.rejected, self.events)?;
        match self.arrived_at {
            Some(at) => write!(f, "arrived at {at}"),
            None     => f.write_str("not arrived"),
        }
    }
}

/// Drives one journey over a recorded or synthetic trace.
///
/// The journey starts at the first sample's timestamp, every sample is fed
/// to `observe()` in order, and the tracker is stopped at the end.
pub struct Replay {
    config:          JourneyConfig,
    stop_on_arrival: bool,
}

impl Replay {
    pub fn new(config: JourneyConfig) -> Self {
        Self { config, stop_on_arrival: false }
    }

    /// Stop feeding samples once `Arrived` has been emitted.
    ///
    /// Default `false`: the remaining samples are still fed (and ignored by
    /// the tracker), matching a caller that forgot to unsubscribe.
    pub fn stop_on_arrival(mut self, stop: bool) -> Self {
        self.stop_on_arrival = stop;
        self
    }

    /// Run the replay, reporting to `observer`.
    ///
    /// # Errors
    ///
    /// [`TraceError::Empty`] for an empty trace and [`TraceError::Tracker`]
    /// if the journey cannot start.  Out-of-range samples are skipped and
    /// counted in [`ReplaySummary::rejected`].
    pub fn run<O: TraceObserver>(&self, samples: &[Sample], observer: &mut O) -> TraceResult<ReplaySummary> {
        let first = samples.first().ok_or(TraceError::Empty)?;

        let mut tracker = JourneyTracker::new();
        let started = tracker.start(self.config.clone(), first.at)?;
        observer.on_event(first.at, &started);

        let mut summary = ReplaySummary { events: 1, ..ReplaySummary::default() };
        let mut last_at = first.at;

        for sample in samples {
            last_at = sample.at;
            let event = match tracker.observe(sample.position, sample.at) {
                Ok(event) => event,
                Err(e) if e.is_invalid_coordinate() => {
                    warn!("skipping sample at {}: {e}", sample.at);
                    summary.rejected += 1;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            summary.samples += 1;
            observer.on_sample(sample, event.as_ref());

            if let Some(event) = &event {
                summary.events += 1;
                if event.is_arrival() {
                    summary.arrived_at = Some(sample.at);
                }
                observer.on_event(sample.at, event);
            }

            if self.stop_on_arrival && summary.arrived_at.is_some() {
                break;
            }
        }

        tracker.stop();
        observer.on_replay_end(last_at);
        info!("replay finished: {summary}");

        Ok(summary)
    }
}
