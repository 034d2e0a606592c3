//! replay: feed a location trace through a journey tracker.
//!
//! Loads a journey config (JSON) and a location trace (CSV), or synthesizes
//! a straight walk when no trace is given, then prints the notices a
//! presenter would show and writes every event to `journey_events.csv`.
//!
//! ```text
//! RUST_LOG=info cargo run -p replay -- \
//!     --config demos/replay/data/journey.json \
//!     --trace  demos/replay/data/walk.csv \
//!     --out    /tmp
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use log::info;

use jt_core::Timestamp;
use jt_notify::{DEFAULT_MIN_EMIT_INTERVAL_SECS, NoticeObserver, Presenter, PresenterConfig};
use jt_output::{CsvWriter, EventLogObserver, OutputWriter};
use jt_trace::{Replay, Sample, StraightLineTrace, TraceObserver, load_trace_csv};
use jt_tracker::{JourneyConfig, JourneyEvent};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Replay a location trace through the journey tracker")]
struct Args {
    /// Journey config file (JSON).
    #[arg(long)]
    config: PathBuf,

    /// Location trace (CSV: timestamp,latitude,longitude).  A straight walk
    /// from origin to destination is synthesized when omitted.
    #[arg(long)]
    trace: Option<PathBuf>,

    /// Directory for journey_events.csv.
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Minimum seconds between two progress notices.
    #[arg(long, default_value_t = DEFAULT_MIN_EMIT_INTERVAL_SECS)]
    min_emit_secs: f64,

    /// GPS jitter for synthesized traces, metres.
    #[arg(long, default_value_t = 0.0)]
    jitter_m: f64,

    /// Seed for synthesized jitter.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Stop feeding samples once arrived.
    #[arg(long)]
    stop_on_arrival: bool,
}

// ── Observer fan-out ──────────────────────────────────────────────────────────

struct Both<W: OutputWriter> {
    log:     EventLogObserver<W>,
    notices: NoticeObserver,
}

impl<W: OutputWriter> TraceObserver for Both<W> {
    fn on_event(&mut self, at: Timestamp, event: &JourneyEvent) {
        self.log.on_event(at, event);
        self.notices.on_event(at, event);
    }

    fn on_sample(&mut self, sample: &Sample, event: Option<&JourneyEvent>) {
        self.log.on_sample(sample, event);
        self.notices.on_sample(sample, event);
    }

    fn on_replay_end(&mut self, last_at: Timestamp) {
        self.log.on_replay_end(last_at);
        self.notices.on_replay_end(last_at);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn load_config(args: &Args) -> Result<JourneyConfig> {
    let file = File::open(&args.config)
        .with_context(|| format!("opening {}", args.config.display()))?;
    let config: JourneyConfig = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", args.config.display()))?;
    config.validate()?;
    Ok(config)
}

fn load_samples(args: &Args, config: &JourneyConfig) -> Result<Vec<Sample>> {
    match &args.trace {
        Some(path) => load_trace_csv(path).with_context(|| format!("loading {}", path.display())),
        None => {
            info!("no trace given; synthesizing a walk at {} m/s", config.assumed_speed_mps);
            let trace = StraightLineTrace::new(
                config.origin,
                config.destination,
                config.assumed_speed_mps,
                config.update_interval_secs,
            )
            .with_jitter(args.jitter_m, args.seed);
            Ok(trace.generate(Utc::now())?)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config  = load_config(&args)?;
    let samples = load_samples(&args, &config)?;
    println!(
        "Journey {} → {} (radius {} m, {} m/s), {} samples",
        config.origin,
        config.destination,
        config.radius_m,
        config.assumed_speed_mps,
        samples.len()
    );

    let presenter = Presenter::new(PresenterConfig {
        min_emit_interval_secs: args.min_emit_secs,
        ..PresenterConfig::default()
    })
    .with_label(config.label.clone());

    let mut observer = Both {
        log:     EventLogObserver::new(CsvWriter::new(&args.out)?),
        notices: NoticeObserver::new(presenter),
    };

    let summary = Replay::new(config)
        .stop_on_arrival(args.stop_on_arrival)
        .run(&samples, &mut observer)?;

    if let Some(e) = observer.log.take_error() {
        return Err(e).context("writing event log");
    }

    for notice in observer.notices.notices() {
        println!(
            "  {}  [{:<7}] {:<13} {:>5.1}%  {:>7.0} m{}",
            notice.at.format("%H:%M:%S"),
            notice.tag,
            notice.kind.to_string(),
            notice.percent,
            notice.remaining_m,
            if notice.silent { "" } else { "  (alert)" },
        );
    }
    println!();
    println!("{summary}");
    println!("Events written to {}", args.out.join("journey_events.csv").display());

    Ok(())
}
