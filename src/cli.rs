// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line configuration of the `wheel` binary.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use prize_wheel::config::DEFAULT_DURATION_SECS;
use prize_wheel::engine::DEFAULT_FRAME_INTERVAL;
use prize_wheel::Strategy;
use thiserror::Error;

pub const USAGE: &str = "usage: wheel [FILE] [--strategy individual|group] [--duration SECS] \
[--manual FRAMES] [--seed N] [--realtime]";

/// Frames a spin may take before the demo gives up.
pub const MAX_FRAMES: usize = 100_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown option {flag}\n{}", USAGE)]
    UnknownFlag { flag: String },
    #[error("option {flag} needs a value\n{}", USAGE)]
    MissingValue { flag: String },
    #[error("option {flag} expects a whole number, got {value:?}")]
    InvalidNumber { flag: String, value: String },
    #[error("unknown strategy {value:?}; expected individual or group")]
    UnknownStrategy {
        value: String,
        #[source]
        source: strum::ParseError,
    },
    #[error("only one input file may be given (got {first:?} and {second:?})")]
    ExtraInput { first: PathBuf, second: PathBuf },
}

/// Settings for one run of the demo.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// File to read entries from; stdin when absent.
    pub input: Option<PathBuf>,
    pub strategy: Strategy,
    pub duration_secs: f64,
    /// Spin manually and stop after this many frames; auto spin when absent.
    pub manual_frames: Option<usize>,
    pub seed: Option<u64>,
    /// Pace frames with the wall clock instead of simulating them.
    pub realtime: bool,
    pub frame_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: None,
            strategy: Strategy::default(),
            duration_secs: DEFAULT_DURATION_SECS,
            manual_frames: None,
            seed: None,
            realtime: false,
            frame_interval: DEFAULT_FRAME_INTERVAL,
        }
    }
}

impl AppConfig {
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--strategy" => {
                    let value = required(&arg, args.next())?;
                    config.strategy = Strategy::from_str(&value)
                        .map_err(|source| ConfigError::UnknownStrategy { value, source })?;
                }
                "--duration" => {
                    config.duration_secs = parse_duration(&required(&arg, args.next())?);
                }
                "--manual" => {
                    config.manual_frames = Some(number(&arg, required(&arg, args.next())?)?);
                }
                "--seed" => {
                    config.seed = Some(number(&arg, required(&arg, args.next())?)?);
                }
                "--realtime" => config.realtime = true,
                flag if flag.starts_with("--") => {
                    return Err(ConfigError::UnknownFlag {
                        flag: flag.to_string(),
                    })
                }
                path => {
                    let path = PathBuf::from(path);
                    if let Some(first) = config.input.take() {
                        return Err(ConfigError::ExtraInput {
                            first,
                            second: path,
                        });
                    }
                    config.input = Some(path);
                }
            }
        }

        Ok(config)
    }
}

fn required(flag: &str, value: Option<String>) -> Result<String, ConfigError> {
    value.ok_or_else(|| ConfigError::MissingValue {
        flag: flag.to_string(),
    })
}

fn number<T: FromStr>(flag: &str, value: String) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        flag: flag.to_string(),
        value,
    })
}

/// Seconds of an auto spin. Unusable values fall back to the default
/// rather than failing, like the wheel's duration field always has.
fn parse_duration(value: &str) -> f64 {
    match value.trim().parse::<f64>() {
        Ok(seconds) if seconds.is_finite() && seconds > 0.0 => seconds,
        _ => DEFAULT_DURATION_SECS,
    }
}
