//! Plain data row written by output backends.

use jt_core::Timestamp;
use jt_tracker::{EventKind, JourneyEvent};

/// One journey event, flattened.  Fields that a variant does not carry are
/// `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventRow {
    pub timestamp:         Timestamp,
    pub kind:              EventKind,
    pub percent:           Option<f64>,
    pub remaining_m:       f64,
    pub remaining_minutes: Option<u64>,
    /// Only set on `started` rows.
    pub estimated_arrival: Option<Timestamp>,
}

impl EventRow {
    pub fn from_event(at: Timestamp, event: &JourneyEvent) -> Self {
        let (percent, remaining_minutes, estimated_arrival) = match *event {
            JourneyEvent::Started { estimated_arrival, .. } => (Some(0.0), None, Some(estimated_arrival)),
            JourneyEvent::Progress { percent, remaining_minutes, .. } => (Some(percent), Some(remaining_minutes), None),
            JourneyEvent::Arrived { .. } => (Some(100.0), Some(0), None),
        };
        Self {
            timestamp: at,
            kind: event.kind(),
            percent,
            remaining_m: event.remaining_m(),
            remaining_minutes,
            estimated_arrival,
        }
    }
}
