//! Per-journey tracking state.

use std::fmt;

use jt_core::Timestamp;

use crate::JourneyConfig;

/// Where the tracker is in its lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No journey.  Samples are ignored.
    Idle,
    /// Journey started, destination not yet reached.
    Active,
    /// The geofence was entered once.  Samples are ignored until `stop()`.
    Arrived,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Idle    => "idle",
            Phase::Active  => "active",
            Phase::Arrived => "arrived",
        };
        f.pad(s)
    }
}

/// State of the journey currently owned by a
/// [`JourneyTracker`][crate::JourneyTracker].
///
/// Only the tracker mutates it, and only from `observe()`.
/// `initial_distance_m` is fixed at start and never recomputed.
#[derive(Clone, Debug, PartialEq)]
pub struct JourneyState {
    pub config: JourneyConfig,

    /// Origin → destination distance at start, metres.  Always `> radius_m`.
    pub initial_distance_m: f64,

    pub started_at: Timestamp,

    /// Time of the most recent accepted sample; `None` until the first one.
    pub last_sample_at: Option<Timestamp>,

    /// Distance to the destination at the most recent accepted sample.
    pub last_distance_m: Option<f64>,

    /// Number of samples accepted while active (including the arriving one).
    pub samples: u64,

    pub has_arrived: bool,
}

impl JourneyState {
    pub(crate) fn new(config: JourneyConfig, initial_distance_m: f64, started_at: Timestamp) -> Self {
        Self {
            config,
            initial_distance_m,
            started_at,
            last_sample_at:  None,
            last_distance_m: None,
            samples:         0,
            has_arrived:     false,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        if self.has_arrived { Phase::Arrived } else { Phase::Active }
    }
}
