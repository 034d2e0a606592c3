//! Error type for coordinate math.

use thiserror::Error;

/// Failures raised by the stateless math in this crate.
///
/// Both variants are local and recoverable; nothing here performs I/O.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeoError {
    #[error("coordinate ({latitude}, {longitude}) is outside the WGS-84 range")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("invalid {what}: {value}")]
    InvalidArgument { what: &'static str, value: f64 },
}

/// Shorthand result type for `jt-core`.
pub type GeoResult<T> = Result<T, GeoError>;
