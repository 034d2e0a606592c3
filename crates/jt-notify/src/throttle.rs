//! Minimum-interval gate for progress notices.

use jt_core::Timestamp;
use jt_core::time::secs_between;

/// Admits an emission only when strictly more than `min_interval_secs` have
/// passed since the last admitted (or marked) one.
#[derive(Clone, Debug, PartialEq)]
pub struct EmitThrottle {
    min_interval_secs: f64,
    last:              Option<Timestamp>,
}

impl EmitThrottle {
    /// A throttle with no emission recorded.  A non-positive interval
    /// admits everything.
    pub fn new(min_interval_secs: f64) -> Self {
        Self { min_interval_secs, last: None }
    }

    pub fn min_interval_secs(&self) -> f64 {
        self.min_interval_secs
    }

    pub fn last_emit(&self) -> Option<Timestamp> {
        self.last
    }

    /// Record an emission at `now` and return `true` if allowed; leave the
    /// throttle untouched and return `false` otherwise.
    pub fn admit(&mut self, now: Timestamp) -> bool {
        let allowed = match self.last {
            None       => true,
            Some(last) => secs_between(last, now) > self.min_interval_secs,
        };
        if allowed {
            self.last = Some(now);
        }
        allowed
    }

    /// Record an emission that bypassed the gate.
    pub fn mark(&mut self, now: Timestamp) {
        self.last = Some(now);
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
