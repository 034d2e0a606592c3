//! `jt-tracker` — the geofenced journey-progress state machine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`config`]  | `JourneyConfig` — origin, destination, geofence radius, speed  |
//! | [`state`]   | `JourneyState`, `Phase`                                        |
//! | [`event`]   | `JourneyEvent` — what a start or sample produced               |
//! | [`tracker`] | `JourneyTracker` — owns one journey and its transitions        |
//! | [`shared`]  | `SharedTracker` — mutex-guarded handle for overlapping callers |
//! | [`error`]   | `TrackerError`, `TrackerResult<T>`                             |
//!
//! # Lifecycle
//!
//! ```text
//!            start()               sample inside radius
//!   Idle ─────────────▶ Active ─────────────────────────▶ Arrived
//!    ▲                    │                                  │
//!    └──────── stop() ────┴────────────── stop() ────────────┘
//! ```
//!
//! 1. [`JourneyTracker::start`] fixes the initial distance and returns
//!    [`JourneyEvent::Started`].
//! 2. Each [`JourneyTracker::observe`] while `Active` returns either
//!    `Progress` or, once the sample falls inside the geofence, `Arrived`.
//! 3. `Arrived` is emitted at most once; later samples return `None` until
//!    [`JourneyTracker::stop`] resets the tracker to `Idle`.
//!
//! The tracker never reads the clock and never schedules anything — the
//! caller drives it from whatever timer or location callback it owns.

pub mod config;
pub mod error;
pub mod event;
pub mod shared;
pub mod state;
pub mod tracker;


pub use config::{DEFAULT_SPEED_MPS, DEFAULT_UPDATE_INTERVAL_SECS, JourneyConfig};
pub use error::{TrackerError, TrackerResult};
pub use event::{EventKind, JourneyEvent};
pub use shared::SharedTracker;
pub use state::{JourneyState, Phase};
pub use tracker::JourneyTracker;
