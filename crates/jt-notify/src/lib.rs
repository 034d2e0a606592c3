//! `jt-notify` — turns journey events into notification decisions.
//!
//! The tracker answers "what happened"; this crate answers "should the user
//! be told, and how loudly".  It produces structured [`Notice`] values and
//! leaves titles, icons and delivery to the platform layer.
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`notice`]    | `Notice`, `NoticeKind`, `NoticeTag`, `Replace`            |
//! | [`throttle`]  | `EmitThrottle` — minimum interval between progress notices|
//! | [`presenter`] | `Presenter`, `PresenterConfig`                            |
//! | [`observer`]  | `NoticeObserver` — a `TraceObserver` that collects notices|

pub mod notice;
pub mod observer;
pub mod presenter;
pub mod throttle;

#[cfg(test)]
mod tests;

pub use notice::{Notice, NoticeKind, NoticeTag, Replace};
pub use observer::NoticeObserver;
pub use presenter::{DEFAULT_ALMOST_THERE_MINUTES, DEFAULT_MIN_EMIT_INTERVAL_SECS, Presenter, PresenterConfig};
pub use throttle::EmitThrottle;
