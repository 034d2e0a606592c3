//! A cloneable, lock-guarded tracker handle.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use jt_core::{Coordinate, Timestamp};

use crate::{JourneyConfig, JourneyEvent, JourneyState, JourneyTracker, Phase, TrackerResult};

/// Serializes `start`/`observe`/`stop` across threads.
///
/// Use this when location callbacks and timers may fire concurrently.  Each
/// call holds the lock for the whole transition, so `Active → Arrived`
/// happens exactly once and only one caller ever sees `Arrived`.
///
/// Every tracker operation is total, so a lock poisoned by a panicking
/// caller still guards a consistent tracker and is recovered.
#[derive(Clone, Debug, Default)]
pub struct SharedTracker {
    inner: Arc<Mutex<JourneyTracker>>,
}

impl SharedTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, JourneyTracker> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn start(&self, config: JourneyConfig, now: Timestamp) -> TrackerResult<JourneyEvent> {
        self.lock().start(config, now)
    }

    pub fn observe(&self, sample: Coordinate, now: Timestamp) -> TrackerResult<Option<JourneyEvent>> {
        self.lock().observe(sample, now)
    }

    pub fn stop(&self) -> Option<JourneyState> {
        self.lock().stop()
    }

    pub fn phase(&self) -> Phase {
        self.lock().phase()
    }

    /// A copy of the current journey state.
    pub fn snapshot(&self) -> Option<JourneyState> {
        self.lock().state().cloned()
    }
}

impl From<JourneyTracker> for SharedTracker {
    fn from(tracker: JourneyTracker) -> Self {
        Self { inner: Arc::new(Mutex::new(tracker)) }
    }
}
