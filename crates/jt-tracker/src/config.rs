//! Per-journey configuration.

use jt_core::{Coordinate, GeoError};

use crate::TrackerResult;

/// Assumed travel speed when none is configured, metres per second
/// (a brisk walk).
pub const DEFAULT_SPEED_MPS: f64 = 5.0;

/// Suggested sampling cadence, seconds.  Advisory only; the tracker does
/// not schedule anything.
pub const DEFAULT_UPDATE_INTERVAL_SECS: f64 = 30.0;

/// Everything needed to start one journey.
///
/// Created once per [`JourneyTracker::start`][crate::JourneyTracker::start]
/// and never mutated afterwards; the tracker keeps its own copy.
///
/// Typically deserialized from a JSON/TOML file by the application crate
/// (enable the `serde` feature).  Only `origin`, `destination` and
/// `radius_m` are required there.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JourneyConfig {
    /// Where the traveller starts.  Fixes the initial distance.
    pub origin: Coordinate,

    /// Centre of the arrival geofence.
    pub destination: Coordinate,

    /// Geofence radius in metres.  Must be `> 0`.
    pub radius_m: f64,

    /// How often the caller intends to feed samples, seconds.  Must be `> 0`.
    #[cfg_attr(feature = "serde", serde(default = "default_update_interval"))]
    pub update_interval_secs: f64,

    /// Speed used for ETA estimates, metres per second.  Must be `> 0`.
    #[cfg_attr(feature = "serde", serde(default = "default_speed"))]
    pub assumed_speed_mps: f64,

    /// Human-readable destination name, passed through to presenters.
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: Option<String>,
}

#[cfg(feature = "serde")]
fn default_speed() -> f64 {
    DEFAULT_SPEED_MPS
}

#[cfg(feature = "serde")]
fn default_update_interval() -> f64 {
    DEFAULT_UPDATE_INTERVAL_SECS
}

impl JourneyConfig {
    /// A config with default speed and update interval and no label.
    pub fn new(origin: Coordinate, destination: Coordinate, radius_m: f64) -> Self {
        Self {
            origin,
            destination,
            radius_m,
            update_interval_secs: DEFAULT_UPDATE_INTERVAL_SECS,
            assumed_speed_mps:    DEFAULT_SPEED_MPS,
            label:                None,
        }
    }

    pub fn with_speed(mut self, speed_mps: f64) -> Self {
        self.assumed_speed_mps = speed_mps;
        self
    }

    pub fn with_update_interval(mut self, secs: f64) -> Self {
        self.update_interval_secs = secs;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Check coordinate ranges and that every numeric field is positive and
    /// finite.
    ///
    /// Does not check the degenerate "already inside the geofence" case;
    /// that needs the distance and is reported by `start` as
    /// [`TrackerError::InvalidConfig`][crate::TrackerError::InvalidConfig].
    pub fn validate(&self) -> TrackerResult<()> {
        self.origin.validate()?;
        self.destination.validate()?;
        positive("radius", self.radius_m)?;
        positive("update interval", self.update_interval_secs)?;
        positive("speed", self.assumed_speed_mps)?;
        Ok(())
    }
}

fn positive(what: &'static str, value: f64) -> Result<(), GeoError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(GeoError::InvalidArgument { what, value })
    }
}
