//! A single position fix.

use jt_core::{Coordinate, Timestamp};

/// One location sample as a location provider would deliver it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sample {
    pub at:       Timestamp,
    pub position: Coordinate,
}

impl Sample {
    #[inline]
    pub fn new(at: Timestamp, position: Coordinate) -> Self {
        Self { at, position }
    }
}
