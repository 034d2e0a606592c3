//! Synthetic traces for demos and tests.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use jt_core::time::add_secs;
use jt_core::{Coordinate, GeoError, Timestamp};

use crate::{Sample, TraceResult};

/// Upper bound on generated samples; guards against a tiny speed × interval
/// step over a long distance.
pub const MAX_SYNTH_SAMPLES: usize = 1_000_000;

/// A traveller moving at constant speed along the great circle from
/// `origin` to `destination`, fixed every `interval_secs`.
///
/// With `jitter_m > 0` every fix except the last is displaced by up to that
/// many metres in a random direction, drawn from a `SmallRng` seeded with
/// `seed` so traces are reproducible.
#[derive(Clone, Debug, PartialEq)]
pub struct StraightLineTrace {
    pub origin:        Coordinate,
    pub destination:   Coordinate,
    pub speed_mps:     f64,
    pub interval_secs: f64,
    pub jitter_m:      f64,
    pub seed:          u64,
}

impl StraightLineTrace {
    pub fn new(origin: Coordinate, destination: Coordinate, speed_mps: f64, interval_secs: f64) -> Self {
        Self {
            origin,
            destination,
            speed_mps,
            interval_secs,
            jitter_m: 0.0,
            seed:     0,
        }
    }

    pub fn with_jitter(mut self, jitter_m: f64, seed: u64) -> Self {
        self.jitter_m = jitter_m;
        self.seed = seed;
        self
    }

    /// Generate the trace, first fix at `start` on the origin and last fix
    /// exactly on the destination.
    ///
    /// # Errors
    ///
    /// Out-of-range endpoints, a non-positive speed or interval, a negative
    /// jitter, or more than [`MAX_SYNTH_SAMPLES`] fixes.
    pub fn generate(&self, start: Timestamp) -> TraceResult<Vec<Sample>> {
        self.origin.validate()?;
        self.destination.validate()?;
        for (what, value) in [("speed", self.speed_mps), ("interval", self.interval_secs)] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(GeoError::InvalidArgument { what, value }.into());
            }
        }
        if !(self.jitter_m >= 0.0 && self.jitter_m.is_finite()) {
            return Err(GeoError::InvalidArgument { what: "jitter", value: self.jitter_m }.into());
        }

        let total   = self.origin.distance_m(self.destination);
        let bearing = self.origin.bearing_deg(self.destination);
        let step    = self.speed_mps * self.interval_secs;
        let steps   = (total / step).ceil();
        if steps >= MAX_SYNTH_SAMPLES as f64 {
            return Err(GeoError::InvalidArgument { what: "sample count", value: steps }.into());
        }
        let steps = steps as usize;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut samples = Vec::with_capacity(steps + 1);

        for i in 0..=steps {
            let at = add_secs(start, i as f64 * self.interval_secs);
            let position = if i == steps {
                self.destination
            } else {
                let on_path = self.origin.offset(bearing, i as f64 * step);
                if self.jitter_m > 0.0 {
                    on_path.offset(rng.gen_range(0.0..360.0), rng.gen_range(0.0..self.jitter_m))
                } else {
                    on_path
                }
            };
            samples.push(Sample::new(at, position));
        }

        Ok(samples)
    }
}
