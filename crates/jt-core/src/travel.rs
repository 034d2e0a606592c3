//! ETA and progress arithmetic over plain distances.

use crate::{GeoError, GeoResult};

/// Seconds needed to cover `distance_m` at a constant `speed_mps`.
///
/// A non-positive or non-finite speed fails with
/// [`GeoError::InvalidArgument`] rather than returning infinity, as does a
/// negative distance.
pub fn eta_secs(distance_m: f64, speed_mps: f64) -> GeoResult<f64> {
    if !(speed_mps > 0.0 && speed_mps.is_finite()) {
        return Err(GeoError::InvalidArgument { what: "speed", value: speed_mps });
    }
    if !(distance_m >= 0.0) {
        return Err(GeoError::InvalidArgument { what: "distance", value: distance_m });
    }
    Ok(distance_m / speed_mps)
}

/// Share of the initial distance already covered, in percent.
///
/// Clamped to `[0, 100]`: a traveller further away than at the start reports
/// `0`, one past the destination reports `100`.
pub fn progress_percent(initial_distance_m: f64, current_distance_m: f64) -> GeoResult<f64> {
    if !(initial_distance_m > 0.0 && initial_distance_m.is_finite()) {
        return Err(GeoError::InvalidArgument {
            what:  "initial distance",
            value: initial_distance_m,
        });
    }
    if !(current_distance_m >= 0.0) {
        return Err(GeoError::InvalidArgument {
            what:  "current distance",
            value: current_distance_m,
        });
    }
    let covered = (initial_distance_m - current_distance_m) / initial_distance_m;
    Ok((covered * 100.0).clamp(0.0, 100.0))
}
