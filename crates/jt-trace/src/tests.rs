//! Unit tests for jt-trace.

use chrono::{TimeZone, Utc};
use jt_core::{Coordinate, Timestamp};

fn t(secs: i64) -> Timestamp {
    Utc.timestamp_opt(1_714_564_800 + secs, 0).unwrap() // 2024-05-01T12:00:00Z
}

fn c(latitude: f64, longitude: f64) -> Coordinate {
    Coordinate { latitude, longitude }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use super::*;
    use crate::{TraceError, load_trace_csv, load_trace_reader};

    const TRACE: &str = "\
timestamp,latitude,longitude
2024-05-01T12:00:00Z,48.8460,2.3500
2024-05-01T12:00:30Z,48.8473,2.3500
2024-05-01T12:00:30Z,48.8486,2.3500
";

    #[test]
    fn parses_rows_in_order() {
        let samples = load_trace_reader(Cursor::new(TRACE)).unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].at, t(0));
        assert_eq!(samples[1].at, t(30));
        assert_eq!(samples[0].position, c(48.8460, 2.3500));
    }

    #[test]
    fn header_only_is_empty() {
        let samples = load_trace_reader(Cursor::new("timestamp,latitude,longitude\n")).unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn out_of_range_coordinate_names_row() {
        let csv = "timestamp,latitude,longitude\n\
                   2024-05-01T12:00:00Z,10.0,10.0\n\
                   2024-05-01T12:00:10Z,95.0,10.0\n";
        let err = load_trace_reader(Cursor::new(csv)).unwrap_err();
        match err {
            TraceError::Parse(msg) => assert!(msg.starts_with("row 2:"), "{msg}"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn backwards_timestamp_rejected() {
        let csv = "timestamp,latitude,longitude\n\
                   2024-05-01T12:00:10Z,10.0,10.0\n\
                   2024-05-01T12:00:00Z,10.0,10.0\n";
        let err = load_trace_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, TraceError::OutOfOrder { row: 2, .. }));
    }

    #[test]
    fn malformed_timestamp_is_parse_error() {
        let csv = "timestamp,latitude,longitude\nyesterday,10.0,10.0\n";
        assert!(matches!(load_trace_reader(Cursor::new(csv)), Err(TraceError::Parse(_))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TRACE.as_bytes()).unwrap();
        let samples = load_trace_csv(file.path()).unwrap();
        assert_eq!(samples.len(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_trace_csv(std::path::Path::new("/nonexistent/trace.csv")).unwrap_err();
        assert!(matches!(err, TraceError::Io(_)));
    }
}

// ── StraightLineTrace ─────────────────────────────────────────────────────────

#[cfg(test)]
mod synth {
    use super::*;
    use crate::{StraightLineTrace, TraceError};

    fn walk() -> StraightLineTrace {
        // ~1112 m east at 5 m/s, a fix every 30 s → 150 m steps.
        StraightLineTrace::new(c(0.0, 0.0), c(0.0, 0.01), 5.0, 30.0)
    }

    #[test]
    fn endpoints_and_spacing() {
        let samples = walk().generate(t(0)).unwrap();
        assert_eq!(samples.len(), 9); // ceil(1112 / 150) = 8 steps + origin
        assert_eq!(samples[0].position, c(0.0, 0.0));
        assert_eq!(samples.last().unwrap().position, c(0.0, 0.01));
        assert_eq!(samples[0].at, t(0));
        assert_eq!(samples[1].at, t(30));

        let d01 = samples[0].position.distance_m(samples[1].position);
        assert!((d01 - 150.0).abs() < 0.5, "step {d01}");
    }

    #[test]
    fn timestamps_strictly_increase() {
        let samples = walk().generate(t(0)).unwrap();
        assert!(samples.windows(2).all(|w| w[0].at < w[1].at));
    }

    #[test]
    fn jitter_is_bounded_and_reproducible() {
        let clean    = walk().generate(t(0)).unwrap();
        let jittered = walk().with_jitter(10.0, 7).generate(t(0)).unwrap();
        let again    = walk().with_jitter(10.0, 7).generate(t(0)).unwrap();
        assert_eq!(jittered, again);

        for (a, b) in clean.iter().zip(&jittered) {
            assert!(a.position.distance_m(b.position) <= 10.01);
        }
        assert_eq!(jittered.last().unwrap().position, c(0.0, 0.01));
    }

    #[test]
    fn zero_length_trace_is_single_fix() {
        let samples = StraightLineTrace::new(c(1.0, 1.0), c(1.0, 1.0), 5.0, 30.0).generate(t(0)).unwrap();
        assert_eq!(samples.len(), 1);
    }

    #[test]
    fn bad_parameters_rejected() {
        assert!(matches!(
            StraightLineTrace::new(c(0.0, 0.0), c(0.0, 0.01), 0.0, 30.0).generate(t(0)),
            Err(TraceError::Geo(_))
        ));
        assert!(StraightLineTrace::new(c(0.0, 0.0), c(0.0, 0.01), 5.0, -1.0).generate(t(0)).is_err());
        assert!(StraightLineTrace::new(c(91.0, 0.0), c(0.0, 0.01), 5.0, 30.0).generate(t(0)).is_err());
        assert!(walk().with_jitter(-1.0, 0).generate(t(0)).is_err());
        // 20 000 km in 1 mm steps.
        assert!(StraightLineTrace::new(c(0.0, 0.0), c(0.0, 179.0), 0.001, 1.0).generate(t(0)).is_err());
    }
}

// ── Replay ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod replay {
    use jt_tracker::{EventKind, JourneyConfig, JourneyEvent, TrackerError};

    use super::*;
    use crate::{NoopObserver, Replay, Sample, StraightLineTrace, TraceError, TraceObserver};

    #[derive(Default)]
    struct Recorder {
        events:   Vec<(Timestamp, EventKind)>,
        samples:  usize,
        ended_at: Option<Timestamp>,
    }

    impl TraceObserver for Recorder {
        fn on_event(&mut self, at: Timestamp, event: &JourneyEvent) {
            self.events.push((at, event.kind()));
        }

        fn on_sample(&mut self, _sample: &Sample, _event: Option<&JourneyEvent>) {
            self.samples += 1;
        }

        fn on_replay_end(&mut self, last_at: Timestamp) {
            self.ended_at = Some(last_at);
        }
    }

    fn config() -> JourneyConfig {
        JourneyConfig::new(c(0.0, 0.0), c(0.0, 0.01), 50.0)
    }

    fn trace_with_tail() -> Vec<Sample> {
        let mut samples = StraightLineTrace::new(c(0.0, 0.0), c(0.0, 0.01), 5.0, 30.0).generate(t(0)).unwrap();
        // Two late fixes after arrival.
        samples.push(Sample::new(t(300), c(0.0, 0.01)));
        samples.push(Sample::new(t(330), c(0.0, 0.01)));
        samples
    }

    #[test]
    fn full_replay_reports_every_event() {
        let samples = trace_with_tail();
        let mut rec = Recorder::default();
        let summary = Replay::new(config()).run(&samples, &mut rec).unwrap();

        assert_eq!(summary.samples, samples.len());
        assert_eq!(rec.samples, samples.len());
        assert_eq!(summary.rejected, 0);

        // Started + 8 progress + 1 arrival; the tail produces nothing.
        assert_eq!(summary.events, 10);
        assert_eq!(rec.events.len(), 10);
        assert_eq!(rec.events[0], (t(0), EventKind::Started));
        assert_eq!(rec.events.last().unwrap(), &(t(240), EventKind::Arrived));
        assert_eq!(rec.events.iter().filter(|(_, k)| *k == EventKind::Arrived).count(), 1);

        assert_eq!(summary.arrived_at, Some(t(240)));
        assert_eq!(rec.ended_at, Some(t(330)));
    }

    #[test]
    fn stop_on_arrival_skips_tail() {
        let samples = trace_with_tail();
        let mut rec = Recorder::default();
        let summary = Replay::new(config()).stop_on_arrival(true).run(&samples, &mut rec).unwrap();

        assert_eq!(summary.samples, samples.len() - 2);
        assert_eq!(rec.ended_at, Some(t(240)));
    }

    #[test]
    fn invalid_samples_are_skipped() {
        let samples = vec![
            Sample::new(t(0), c(0.0, 0.0)),
            Sample::new(t(10), c(120.0, 0.0)),
            Sample::new(t(20), c(0.0, 0.005)),
        ];
        let summary = Replay::new(config()).run(&samples, &mut NoopObserver).unwrap();
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.samples, 2);
        assert_eq!(summary.events, 3);
        assert!(summary.arrived_at.is_none());
        assert!(summary.to_string().ends_with("not arrived"));
    }

    #[test]
    fn empty_trace_is_error() {
        let err = Replay::new(config()).run(&[], &mut NoopObserver).unwrap_err();
        assert!(matches!(err, TraceError::Empty));
    }

    #[test]
    fn degenerate_journey_is_tracker_error() {
        let cfg = JourneyConfig::new(c(0.0, 0.0), c(0.0, 0.0001), 50.0);
        let samples = vec![Sample::new(t(0), c(0.0, 0.0))];
        let err = Replay::new(cfg).run(&samples, &mut NoopObserver).unwrap_err();
        assert!(matches!(err, TraceError::Tracker(TrackerError::InvalidConfig { .. })));
    }
}
