//! Wall-clock helpers.
//!
//! The tracker never reads the clock itself: every operation takes a `now`
//! argument so callers (and tests) drive time explicitly.

use chrono::{DateTime, Duration, Utc};

/// UTC wall-clock instant used throughout the workspace.
pub type Timestamp = DateTime<Utc>;

/// `ts` advanced by `secs` seconds, at millisecond precision.
///
/// Negative and NaN offsets count as zero.  Offsets beyond chrono's range
/// saturate at [`DateTime::<Utc>::MAX_UTC`].
pub fn add_secs(ts: Timestamp, secs: f64) -> Timestamp {
    let millis = (secs.max(0.0) * 1_000.0).round();
    if millis >= i64::MAX as f64 {
        return DateTime::<Utc>::MAX_UTC;
    }
    ts.checked_add_signed(Duration::milliseconds(millis as i64))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Seconds from `earlier` to `later`; negative if `later` precedes `earlier`.
#[inline]
pub fn secs_between(earlier: Timestamp, later: Timestamp) -> f64 {
    (later - earlier).num_milliseconds() as f64 / 1_000.0
}
