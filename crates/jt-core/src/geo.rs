//! Geographic coordinate type and great-circle utilities.
//!
//! `Coordinate` uses `f64` latitude/longitude.  Geofence radii are typically
//! tens of metres, so the extra precision over `f32` matters here: at the
//! equator `f32` degrades to roughly a metre of rounding per component.

use std::fmt;

use crate::{GeoError, GeoResult};

/// Mean Earth radius used by every distance computation, in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate.
///
/// Fields are public so literals stay cheap to write in tests and configs;
/// use [`Coordinate::new`] or [`Coordinate::validate`] at trust boundaries.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub latitude:  f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting values outside `[-90, 90]` ×
    /// `[-180, 180]` (NaN and infinities included).
    pub fn new(latitude: f64, longitude: f64) -> GeoResult<Self> {
        let c = Self { latitude, longitude };
        c.validate()?;
        Ok(c)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// `Ok(())` if both components are in range, `InvalidCoordinate` otherwise.
    pub fn validate(&self) -> GeoResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(GeoError::InvalidCoordinate {
                latitude:  self.latitude,
                longitude: self.longitude,
            })
        }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Does not validate its inputs; see [`distance_meters`] for the checked
    /// form.
    pub fn distance_m(self, other: Coordinate) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        // Rounding can push `a` a hair above 1 for near-antipodal points.
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Initial bearing (forward azimuth) towards `other`, degrees in `[0, 360)`.
    pub fn bearing_deg(self, other: Coordinate) -> f64 {
        let lat1  = self.latitude.to_radians();
        let lat2  = other.latitude.to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        y.atan2(x).to_degrees().rem_euclid(360.0)
    }

    /// The point reached by travelling `distance_m` metres from `self` along
    /// the great circle with initial bearing `bearing_deg`.
    ///
    /// Longitude is wrapped back into `[-180, 180]`.
    pub fn offset(self, bearing_deg: f64, distance_m: f64) -> Coordinate {
        let delta = distance_m / EARTH_RADIUS_M;
        let theta = bearing_deg.to_radians();
        let lat1  = self.latitude.to_radians();
        let lon1  = self.longitude.to_radians();

        let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos())
            .clamp(-1.0, 1.0)
            .asin();
        let lon2 = lon1
            + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

        Coordinate {
            latitude:  lat2.to_degrees().clamp(-90.0, 90.0),
            longitude: (lon2.to_degrees() + 540.0).rem_euclid(360.0) - 180.0,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// Checked great-circle distance between `a` and `b` in metres.
///
/// Symmetric, zero for identical inputs, and fails with
/// [`GeoError::InvalidCoordinate`] if either point is out of range.
pub fn distance_meters(a: Coordinate, b: Coordinate) -> GeoResult<f64> {
    a.validate()?;
    b.validate()?;
    Ok(a.distance_m(b))
}

/// Checked initial bearing from `a` to `b`, degrees in `[0, 360)`.
pub fn initial_bearing_deg(a: Coordinate, b: Coordinate) -> GeoResult<f64> {
    a.validate()?;
    b.validate()?;
    Ok(a.bearing_deg(b))
}
