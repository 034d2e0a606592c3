//! `jt-core` — foundational types for the journey tracker.
//!
//! This crate is a dependency of every other `jt-*` crate.  It has no
//! `jt-*` dependencies and holds only stateless math.
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`geo`]         | `Coordinate`, haversine distance, bearing, offset         |
//! | [`travel`]      | `eta_secs`, `progress_percent`                            |
//! | [`time`]        | `Timestamp` alias and second-based arithmetic             |
//! | [`error`]       | `GeoError`, `GeoResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `Coordinate`.            |

pub mod error;
pub mod geo;
pub mod time;
pub mod travel;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GeoError, GeoResult};
pub use geo::{Coordinate, EARTH_RADIUS_M, distance_meters, initial_bearing_deg};
pub use time::Timestamp;
pub use travel::{eta_secs, progress_percent};
