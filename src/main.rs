// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Terminal demo: allocate a wheel from a list of entries and spin it once.

mod cli;

use std::path::{Path, PathBuf};
use std::{env, fs, io, process};

use cli::{AppConfig, ConfigError, MAX_FRAMES};
use prize_wheel::engine::{run_until_idle, Clock, ManualClock, RandomSource, RngSource, SystemClock};
use prize_wheel::{allocate, parse_entries, Segment, SpinEngine, SpinError, SpinOutcome};
use thiserror::Error;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to read {path:?}: {source}")]
    ReadInput { path: PathBuf, source: io::Error },
    #[error("failed to read stdin: {0}")]
    ReadStdin(#[source] io::Error),
    #[error(transparent)]
    Spin(#[from] SpinError),
    #[error("no entries to put on the wheel")]
    NoEntries,
    #[error("spin did not finish within {frames} frames")]
    Unfinished { frames: usize },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("wheel failed: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config = AppConfig::from_args(env::args().skip(1))?;

    let text = read_input(config.input.as_deref())?;
    let entries = parse_entries(&text);
    if entries.is_empty() {
        return Err(AppError::NoEntries);
    }

    let segments = allocate(&entries, config.strategy);
    print_segments(&segments);

    let random: Box<dyn RandomSource> = match config.seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::thread()),
    };
    let mut engine = SpinEngine::with_random(random);
    engine.set_segments(segments);

    let outcome = if config.realtime {
        spin(&mut engine, &SystemClock::new(), &config)?
    } else {
        spin(&mut engine, &ManualClock::new(), &config)?
    };

    match &outcome.winner {
        Some(winner) => println!("\nWinner: {} (group {})", winner.name, winner.group),
        None => println!("\nNo winner"),
    }
    println!(
        "Rested at {:.4} rad after {} frames",
        outcome.final_rotation,
        engine.statistics().get(prize_wheel::state::Counters::Frames)
    );
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String, AppError> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| AppError::ReadInput {
            path: path.to_path_buf(),
            source,
        }),
        None => io::read_to_string(io::stdin()).map_err(AppError::ReadStdin),
    }
}

fn print_segments(segments: &[Segment]) {
    println!("{:<20} {:<12} {:>8} {:>10} {:>10} {:>7}", "name", "group", "weight", "start", "end", "share");
    for segment in segments {
        println!(
            "{:<20} {:<12} {:>8.2} {:>10.4} {:>10.4} {:>6.1}%",
            segment.name,
            segment.group,
            segment.weight,
            segment.start_angle,
            segment.end_angle,
            segment.share() * 100.0
        );
    }
}

fn spin<C: Clock>(engine: &mut SpinEngine, clock: &C, config: &AppConfig) -> Result<SpinOutcome, AppError> {
    let auto_stop = config.manual_frames.is_none();
    engine.start_spin(clock.now(), config.duration_secs, auto_stop, |_| {})?;

    let stop_at = config.manual_frames.unwrap_or(0);
    run_until_idle(engine, clock, config.frame_interval, MAX_FRAMES, |engine, frame| {
        if !auto_stop && frame == stop_at {
            engine.stop_manual();
        }
    })
    .ok_or(AppError::Unfinished { frames: MAX_FRAMES })
}
