//! Unit tests for jt-notify.

use chrono::{TimeZone, Utc};
use jt_core::Timestamp;
use jt_tracker::JourneyEvent;

fn t(secs: i64) -> Timestamp {
    Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
}

fn started() -> JourneyEvent {
    JourneyEvent::Started { estimated_arrival: t(600), initial_distance_m: 3_000.0 }
}

fn progress(remaining_m: f64, remaining_minutes: u64) -> JourneyEvent {
    JourneyEvent::Progress {
        percent: (3_000.0 - remaining_m) / 30.0,
        remaining_m,
        remaining_minutes,
    }
}

// ── EmitThrottle ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod throttle {
    use super::*;
    use crate::EmitThrottle;

    #[test]
    fn first_emission_admitted() {
        let mut th = EmitThrottle::new(30.0);
        assert!(th.admit(t(0)));
        assert_eq!(th.last_emit(), Some(t(0)));
    }

    #[test]
    fn interval_is_strict() {
        let mut th = EmitThrottle::new(30.0);
        th.mark(t(0));
        assert!(!th.admit(t(10)));
        assert!(!th.admit(t(30))); // exactly the interval is not enough
        assert!(th.admit(t(31)));
        assert!(!th.admit(t(40)));
        assert_eq!(th.last_emit(), Some(t(31)));
    }

    #[test]
    fn zero_interval_admits_distinct_times() {
        let mut th = EmitThrottle::new(0.0);
        assert!(th.admit(t(0)));
        assert!(th.admit(t(1)));
    }

    #[test]
    fn reset_forgets_last() {
        let mut th = EmitThrottle::new(30.0);
        th.mark(t(0));
        th.reset();
        assert!(th.admit(t(1)));
    }
}

// ── Presenter ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod presenter {
    use super::*;
    use crate::{NoticeKind, NoticeTag, Presenter, PresenterConfig, Replace};

    fn presenter() -> Presenter {
        Presenter::new(PresenterConfig::default()).with_label(Some("Harbour".into()))
    }

    #[test]
    fn started_is_audible_sticky_and_clears_all() {
        let mut p = presenter();
        let n = p.present(&started(), t(0)).unwrap();
        assert_eq!(n.kind, NoticeKind::Started);
        assert_eq!(n.tag, NoticeTag::Journey);
        assert!(!n.silent);
        assert!(n.sticky);
        assert_eq!(n.replaces, Replace::All);
        assert_eq!(n.percent, 0.0);
        assert_eq!(n.label.as_deref(), Some("Harbour"));
        assert_eq!(p.shown(), Some(NoticeTag::Journey));
    }

    #[test]
    fn progress_throttled_after_start() {
        let mut p = presenter();
        p.present(&started(), t(0));
        assert!(p.present(&progress(2_500.0, 9), t(20)).is_none());

        let n = p.present(&progress(2_000.0, 7), t(45)).unwrap();
        assert_eq!(n.kind, NoticeKind::Countdown { minutes: 7 });
        assert!(n.silent);
        assert!(n.sticky);
        assert_eq!(n.replaces, Replace::SameTag);
        assert!((n.percent - 1_000.0 / 30.0).abs() < 1e-9);

        assert!(p.present(&progress(1_900.0, 7), t(60)).is_none());
        assert!(p.present(&progress(1_500.0, 5), t(76)).is_some());
    }

    #[test]
    fn almost_there_threshold() {
        let mut p = Presenter::new(PresenterConfig { min_emit_interval_secs: 0.0, almost_there_minutes: 2 });
        p.present(&started(), t(0));
        assert_eq!(p.present(&progress(900.0, 3), t(1)).unwrap().kind, NoticeKind::Countdown { minutes: 3 });
        assert_eq!(p.present(&progress(500.0, 2), t(2)).unwrap().kind, NoticeKind::AlmostThere);
        assert_eq!(p.present(&progress(100.0, 1), t(3)).unwrap().kind, NoticeKind::AlmostThere);
    }

    #[test]
    fn arrival_bypasses_throttle_once() {
        let mut p = presenter();
        p.present(&started(), t(0));

        let n = p.present(&JourneyEvent::Arrived { remaining_m: 4.0 }, t(5)).unwrap();
        assert_eq!(n.kind, NoticeKind::Arrived);
        assert_eq!(n.tag, NoticeTag::Arrival);
        assert!(!n.silent);
        assert!(!n.sticky);
        assert_eq!(n.replaces, Replace::All);
        assert_eq!(n.percent, 100.0);

        assert!(p.present(&JourneyEvent::Arrived { remaining_m: 1.0 }, t(6)).is_none());
        assert!(p.present(&progress(10.0, 1), t(100)).is_none());
        assert_eq!(p.shown(), Some(NoticeTag::Arrival));
    }

    #[test]
    fn new_start_rearms_arrival() {
        let mut p = presenter();
        p.present(&started(), t(0));
        p.present(&JourneyEvent::Arrived { remaining_m: 0.0 }, t(10));

        p.present(&started(), t(20));
        assert!(p.present(&JourneyEvent::Arrived { remaining_m: 0.0 }, t(30)).is_some());
    }

    #[test]
    fn reset_clears_state() {
        let mut p = presenter();
        p.present(&started(), t(0));
        p.reset();
        assert!(p.shown().is_none());
        // No throttle history: the first progress is shown immediately.
        assert!(p.present(&progress(2_000.0, 7), t(1)).is_some());
    }

    #[test]
    fn kind_display() {
        assert_eq!(NoticeKind::Countdown { minutes: 4 }.to_string(), "4 min");
        assert_eq!(NoticeKind::AlmostThere.to_string(), "almost there");
        assert_eq!(NoticeTag::Arrival.to_string(), "arrival");
    }
}

// ── NoticeObserver ────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer {
    use jt_core::Coordinate;
    use jt_trace::{Replay, StraightLineTrace};
    use jt_tracker::JourneyConfig;

    use super::*;
    use crate::{NoticeKind, NoticeObserver, Presenter, PresenterConfig};

    #[test]
    fn replay_produces_throttled_notices() {
        let origin = Coordinate { latitude: 0.0, longitude: 0.0 };
        let dest   = Coordinate { latitude: 0.0, longitude: 0.01 };
        // A fix every 10 s over ~1112 m at 5 m/s; arrival lands on the 23rd.
        let samples = StraightLineTrace::new(origin, dest, 5.0, 10.0).generate(t(0)).unwrap();
        let cfg = JourneyConfig::new(origin, dest, 50.0);

        let mut obs = NoticeObserver::new(Presenter::new(PresenterConfig::default()));
        let summary = Replay::new(cfg).run(&samples, &mut obs).unwrap();
        assert!(summary.arrived_at.is_some());

        let notices = obs.into_notices();
        assert_eq!(notices.first().unwrap().kind, NoticeKind::Started);
        assert_eq!(notices.last().unwrap().kind, NoticeKind::Arrived);
        // Progress every 10 s, admitted only every 40 s (> 30 s strictly).
        let progress = notices.len() - 2;
        assert!(progress < summary.events - 2, "{progress} of {}", summary.events - 2);
        assert!(notices.windows(2).all(|w| w[0].at <= w[1].at));
    }
}
