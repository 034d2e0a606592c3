//! The journey state machine.

use jt_core::time::add_secs;
use jt_core::{Coordinate, Timestamp, eta_secs, progress_percent};
use log::{debug, info, trace, warn};

use crate::{JourneyConfig, JourneyEvent, JourneyState, Phase, TrackerError, TrackerResult};

/// Owns at most one journey and decides what each location sample means.
///
/// One instance per concurrently tracked journey.  All methods are
/// synchronous and total; callers whose callbacks may overlap should go
/// through [`SharedTracker`][crate::SharedTracker] or their own lock.
///
/// # Example
///
/// ```rust,ignore
/// let mut tracker = JourneyTracker::new();
/// let started = tracker.start(config, now)?;
/// while let Some(fix) = gps.next() {
///     if let Some(event) = tracker.observe(fix.position, fix.at)? {
///         presenter.present(&event, fix.at);
///     }
/// }
/// tracker.stop();
/// ```
#[derive(Debug, Default)]
pub struct JourneyTracker {
    journey: Option<JourneyState>,
}

impl JourneyTracker {
    /// A tracker in the `Idle` phase.
    pub fn new() -> Self {
        Self { journey: None }
    }

    pub fn phase(&self) -> Phase {
        self.journey.as_ref().map_or(Phase::Idle, JourneyState::phase)
    }

    /// The current journey, if any (present in both `Active` and `Arrived`).
    pub fn state(&self) -> Option<&JourneyState> {
        self.journey.as_ref()
    }

    /// Begin tracking a journey at `now`.
    ///
    /// # Errors
    ///
    /// - [`TrackerError::AlreadyActive`] if a journey is active or arrived
    ///   but not yet stopped.
    /// - [`TrackerError::Geo`] if the config fails
    ///   [`JourneyConfig::validate`].
    /// - [`TrackerError::InvalidConfig`] if the origin already lies inside
    ///   the geofence.
    ///
    /// On error the tracker is left unchanged.
    pub fn start(&mut self, config: JourneyConfig, now: Timestamp) -> TrackerResult<JourneyEvent> {
        if self.journey.is_some() {
            return Err(TrackerError::AlreadyActive);
        }
        config.validate()?;

        let initial_distance_m = config.origin.distance_m(config.destination);
        if initial_distance_m <= config.radius_m {
            return Err(TrackerError::InvalidConfig {
                initial_distance_m,
                radius_m: config.radius_m,
            });
        }
        let eta = eta_secs(initial_distance_m, config.assumed_speed_mps)?;
        let estimated_arrival = add_secs(now, eta);

        info!(
            "journey started: {} → {} ({:.0} m, radius {:.0} m, eta {})",
            config.origin, config.destination, initial_distance_m, config.radius_m, estimated_arrival,
        );
        self.journey = Some(JourneyState::new(config, initial_distance_m, now));

        Ok(JourneyEvent::Started { estimated_arrival, initial_distance_m })
    }

    /// Feed one location sample taken at `now`.
    ///
    /// Returns `Ok(None)` while `Idle` or `Arrived` (late samples are not an
    /// error).  While `Active`, returns `Arrived` for the first sample within
    /// `radius_m` of the destination and `Progress` otherwise.
    ///
    /// # Errors
    ///
    /// An out-of-range `sample` while `Active` fails with
    /// [`TrackerError::Geo`] and the state is not touched.
    pub fn observe(&mut self, sample: Coordinate, now: Timestamp) -> TrackerResult<Option<JourneyEvent>> {
        let Some(journey) = self.journey.as_mut() else {
            trace!("sample {sample} ignored: no journey");
            return Ok(None);
        };
        if journey.has_arrived {
            trace!("sample {sample} ignored: already arrived");
            return Ok(None);
        }
        if let Err(e) = sample.validate() {
            warn!("rejected sample: {e}");
            return Err(e.into());
        }

        let config   = &journey.config;
        let distance = sample.distance_m(config.destination);

        if distance <= config.radius_m {
            journey.record(distance, now);
            journey.has_arrived = true;
            info!("arrived: {distance:.1} m from destination after {} samples", journey.samples);
            return Ok(Some(JourneyEvent::Arrived { remaining_m: distance }));
        }

        // Compute everything fallible before mutating.
        let percent           = progress_percent(journey.initial_distance_m, distance)?;
        let remaining_minutes = (eta_secs(distance, config.assumed_speed_mps)? / 60.0).ceil() as u64;

        journey.record(distance, now);
        debug!("progress {percent:.1}%, {distance:.0} m, ~{remaining_minutes} min to go");

        Ok(Some(JourneyEvent::Progress {
            percent,
            remaining_m: distance,
            remaining_minutes,
        }))
    }

    /// Return to `Idle`, discarding any journey.  Idempotent.
    ///
    /// Returns the discarded state so callers can inspect how it ended.
    pub fn stop(&mut self) -> Option<JourneyState> {
        let previous = self.journey.take();
        if let Some(j) = &previous {
            info!("journey stopped in phase {}", j.phase());
        }
        previous
    }
}

impl JourneyState {
    fn record(&mut self, distance_m: f64, at: Timestamp) {
        if self.last_sample_at.is_some_and(|prev| at < prev) {
            debug!("sample timestamp {at} precedes previous sample");
        }
        self.last_sample_at  = Some(at);
        self.last_distance_m = Some(distance_m);
        self.samples += 1;
    }
}
