//! Events produced by the tracker for a presentation layer to render.

use std::fmt;

use jt_core::Timestamp;

/// What a `start()` or `observe()` call produced.
///
/// Events are plain values: produced once, never mutated, owned by the
/// caller.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum JourneyEvent {
    /// The journey began.
    Started {
        /// Start time plus the ETA for the full initial distance.
        estimated_arrival:  Timestamp,
        initial_distance_m: f64,
    },

    /// A sample outside the geofence.
    Progress {
        /// Share of the initial distance covered, clamped to `[0, 100]`.
        percent:           f64,
        /// Great-circle distance still to go, metres.
        remaining_m:       f64,
        /// ETA at the assumed speed, rounded up to whole minutes.
        remaining_minutes: u64,
    },

    /// The first sample inside the geofence.  Emitted at most once per
    /// journey.
    Arrived {
        /// Distance to the destination at detection (`<= radius_m`).
        remaining_m: f64,
    },
}

/// Discriminant of a [`JourneyEvent`], for keying presentation state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Started,
    Progress,
    Arrived,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Started  => "started",
            EventKind::Progress => "progress",
            EventKind::Arrived  => "arrived",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl JourneyEvent {
    #[inline]
    pub fn kind(&self) -> EventKind {
        match self {
            JourneyEvent::Started { .. }  => EventKind::Started,
            JourneyEvent::Progress { .. } => EventKind::Progress,
            JourneyEvent::Arrived { .. }  => EventKind::Arrived,
        }
    }

    #[inline]
    pub fn is_arrival(&self) -> bool {
        matches!(self, JourneyEvent::Arrived { .. })
    }

    /// Distance to the destination when the event was produced, metres.
    pub fn remaining_m(&self) -> f64 {
        match self {
            JourneyEvent::Started { initial_distance_m, .. } => *initial_distance_m,
            JourneyEvent::Progress { remaining_m, .. }       => *remaining_m,
            JourneyEvent::Arrived { remaining_m }            => *remaining_m,
        }
    }
}
