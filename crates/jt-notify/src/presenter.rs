//! Event → notice decisions.

use jt_core::Timestamp;
use jt_tracker::JourneyEvent;
use log::debug;

use crate::{EmitThrottle, Notice, NoticeKind, NoticeTag, Replace};

/// Minimum seconds between two progress notices.
pub const DEFAULT_MIN_EMIT_INTERVAL_SECS: f64 = 30.0;

/// At or below this many remaining minutes a progress notice becomes
/// [`NoticeKind::AlmostThere`].
pub const DEFAULT_ALMOST_THERE_MINUTES: u64 = 1;

#[derive(Clone, Debug, PartialEq)]
pub struct PresenterConfig {
    pub min_emit_interval_secs: f64,
    pub almost_there_minutes:   u64,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            min_emit_interval_secs: DEFAULT_MIN_EMIT_INTERVAL_SECS,
            almost_there_minutes:   DEFAULT_ALMOST_THERE_MINUTES,
        }
    }
}

/// Decides which [`JourneyEvent`]s become user-visible notices.
///
/// | Event      | Notice                        | Gate                                  |
/// |------------|-------------------------------|---------------------------------------|
/// | `Started`  | `Started`, audible, sticky    | always; restarts the throttle         |
/// | `Progress` | `Countdown`/`AlmostThere`, silent, sticky | [`EmitThrottle`]          |
/// | `Arrived`  | `Arrived`, audible, transient | always, once per journey              |
///
/// One presenter per tracked journey, like the tracker itself.
#[derive(Clone, Debug)]
pub struct Presenter {
    config:   PresenterConfig,
    throttle: EmitThrottle,
    label:    Option<String>,
    shown:    Option<NoticeTag>,
    arrived:  bool,
}

impl Presenter {
    pub fn new(config: PresenterConfig) -> Self {
        Self {
            throttle: EmitThrottle::new(config.min_emit_interval_secs),
            config,
            label:    None,
            shown:    None,
            arrived:  false,
        }
    }

    /// Attach the destination name carried on every notice.
    pub fn with_label(mut self, label: Option<String>) -> Self {
        self.label = label;
        self
    }

    /// Tag of the most recently presented notice.
    pub fn shown(&self) -> Option<NoticeTag> {
        self.shown
    }

    /// Forget everything shown so far (e.g. after the journey was stopped).
    pub fn reset(&mut self) {
        self.throttle.reset();
        self.shown = None;
        self.arrived = false;
    }

    /// Decide whether `event`, observed at `now`, should be shown.
    pub fn present(&mut self, event: &JourneyEvent, now: Timestamp) -> Option<Notice> {
        let notice = match *event {
            JourneyEvent::Started { initial_distance_m, .. } => {
                self.throttle.mark(now);
                self.arrived = false;
                self.notice(NoticeKind::Started, NoticeTag::Journey, now, 0.0, initial_distance_m)
                    .audible()
                    .sticky(true)
                    .replacing(Replace::All)
            }

            JourneyEvent::Progress { percent, remaining_m, remaining_minutes } => {
                if self.arrived {
                    debug!("progress after arrival dropped");
                    return None;
                }
                if !self.throttle.admit(now) {
                    debug!("progress notice throttled at {now}");
                    return None;
                }
                let kind = if remaining_minutes <= self.config.almost_there_minutes {
                    NoticeKind::AlmostThere
                } else {
                    NoticeKind::Countdown { minutes: remaining_minutes }
                };
                self.notice(kind, NoticeTag::Journey, now, percent, remaining_m)
                    .sticky(true)
                    .replacing(Replace::SameTag)
            }

            JourneyEvent::Arrived { remaining_m } => {
                if self.arrived {
                    debug!("duplicate arrival dropped");
                    return None;
                }
                self.arrived = true;
                self.throttle.reset();
                self.notice(NoticeKind::Arrived, NoticeTag::Arrival, now, 100.0, remaining_m)
                    .audible()
                    .sticky(false)
                    .replacing(Replace::All)
            }
        };

        self.shown = Some(notice.tag);
        Some(notice)
    }

    fn notice(&self, kind: NoticeKind, tag: NoticeTag, at: Timestamp, percent: f64, remaining_m: f64) -> Notice {
        Notice {
            kind,
            tag,
            at,
            percent,
            remaining_m,
            label:    self.label.clone(),
            silent:   true,
            sticky:   false,
            replaces: Replace::SameTag,
        }
    }
}

// Small builder helpers so the match arms above read as a table.
impl Notice {
    fn audible(mut self) -> Self {
        self.silent = false;
        self
    }

    fn sticky(mut self, sticky: bool) -> Self {
        self.sticky = sticky;
        self
    }

    fn replacing(mut self, replaces: Replace) -> Self {
        self.replaces = replaces;
        self
    }
}
