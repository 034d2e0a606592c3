use jt_core::GeoError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrackerError {
    /// A coordinate or numeric argument failed validation.
    #[error(transparent)]
    Geo(#[from] GeoError),

    #[error("a journey is already in progress; call stop() first")]
    AlreadyActive,

    #[error("origin is {initial_distance_m:.1} m from the destination, inside the {radius_m:.1} m geofence")]
    InvalidConfig {
        initial_distance_m: f64,
        radius_m:           f64,
    },
}

impl TrackerError {
    /// `true` for coordinate range failures, wherever they originated.
    pub fn is_invalid_coordinate(&self) -> bool {
        matches!(self, TrackerError::Geo(GeoError::InvalidCoordinate { .. }))
    }

    /// `true` for non-positive radius, speed, interval or distance.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, TrackerError::Geo(GeoError::InvalidArgument { .. }))
    }
}

pub type TrackerResult<T> = Result<T, TrackerError>;
