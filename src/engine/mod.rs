// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Spin engine.
//!
//! This module implements the state machine that animates the wheel and
//! picks the winner. The engine never reads a clock and never schedules
//! anything itself: the host calls [`SpinEngine::advance`] once per frame
//! with the current timestamp, which keeps every transition testable with
//! plain `Duration` values.
//!
//! # Architecture
//!
//! The engine owns:
//! - The current segment list (replaced wholesale by `set_segments`)
//! - The spin state (rotation, mode, velocity, timing)
//! - An injectable random source for auto-spin targets
//! - The completion callback of the spin in progress
//!
//! A spin cycle runs as follows:
//! 1. `start_spin` leaves `Idle` for `AutoRunning` or `ManualRunning`
//! 2. Auto: each frame eases from the start rotation to a random target
//!    between 5 and 10 turns away; the spin ends when its duration elapses
//! 3. Manual: each frame adds a constant velocity until `stop_manual`, then
//!    each frame decays the velocity until it drops below a threshold
//! 4. On the final frame the winner is resolved, the callback fires with it
//!    and the engine returns to `Idle`, keeping its rotation
//!
//! # Example
//!
//! ```
//! use prize_wheel::allocation::allocate;
//! use prize_wheel::engine::{FixedRandom, SpinEngine};
//! use prize_wheel::entry::{Entry, Strategy};
//! use std::time::Duration;
//!
//! let entries = vec![Entry::ungrouped("Tea", 1.0), Entry::ungrouped("Coffee", 1.0)];
//! let mut engine = SpinEngine::with_random(Box::new(FixedRandom(0.3)));
//! engine.set_segments(allocate(&entries, Strategy::Individual));
//!
//! engine.start_spin(Duration::ZERO, 2.0, true, |winner| {
//!     println!("winner: {:?}", winner.map(|s| &s.name));
//! })?;
//! assert!(engine.is_spinning());
//!
//! assert!(engine.advance(Duration::from_secs(1)).is_none());
//! let outcome = engine.advance(Duration::from_secs(2)).unwrap();
//! assert!(outcome.winner.is_some());
//! assert!(!engine.is_spinning());
//! # Ok::<(), prize_wheel::engine::SpinError>(())
//! ```

pub mod driver;
pub mod easing;
pub mod error;
pub mod random;
pub mod winner;

pub use driver::{run_until_idle, Clock, FrameDriver, ManualClock, SystemClock, DEFAULT_FRAME_INTERVAL};
pub use easing::ease_out_cubic;
pub use error::SpinError;
pub use random::{FixedRandom, RandomSource, RngSource};
pub use winner::resolve_winner;

use std::fmt;
use std::time::Duration;

use log::{debug, info};

use crate::allocation::Segment;
use crate::config::SpinConfig;
use crate::geometry::{fold_turns, FULL_TURN};
use crate::state::{Counters, SpinMode, SpinState, Statistics};

/// Called once at the end of every spin with the winner, if any.
pub type CompletionCallback = Box<dyn FnOnce(Option<&Segment>)>;

/// Result of the frame that ended a spin.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinOutcome {
    /// Cycle that ended.
    pub spin_id: u64,

    /// Rotation the wheel came to rest at, not normalised.
    pub final_rotation: f64,

    /// Segment under the pointer; None for an empty or gapped wheel.
    pub winner: Option<Segment>,
}

/// Stateful controller of one wheel.
pub struct SpinEngine {
    segments: Vec<Segment>,
    state: SpinState,
    config: SpinConfig,
    random: Box<dyn RandomSource>,
    on_complete: Option<CompletionCallback>,

    /// Incremented by every accepted `start_spin`.
    spin_id: u64,

    statistics: Statistics,
}

impl SpinEngine {
    /// Create an idle engine with default settings and a thread-local
    /// random source.
    pub fn new() -> Self {
        Self::with_random(Box::new(RngSource::thread()))
    }

    pub fn with_random(random: Box<dyn RandomSource>) -> Self {
        Self::with_config(SpinConfig::default(), random)
    }

    pub fn with_config(config: SpinConfig, random: Box<dyn RandomSource>) -> Self {
        Self {
            segments: Vec::new(),
            state: SpinState::default(),
            config,
            random,
            on_complete: None,
            spin_id: 0,
            statistics: Statistics::new(),
        }
    }

    /// Replace the segment list.
    ///
    /// A spin in progress keeps running and resolves its winner against the
    /// new list.
    pub fn set_segments(&mut self, segments: Vec<Segment>) {
        debug!("segments replaced: {} -> {}", self.segments.len(), segments.len());
        self.segments = segments;
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True from an accepted `start_spin` until the frame that resolves the
    /// winner. UIs use this to gate their controls.
    pub fn is_spinning(&self) -> bool {
        self.state.is_spinning()
    }

    pub fn mode(&self) -> SpinMode {
        self.state.mode
    }

    pub fn current_rotation(&self) -> f64 {
        self.state.current_rotation
    }

    pub fn velocity(&self) -> f64 {
        self.state.velocity
    }

    pub fn target_rotation(&self) -> Option<f64> {
        self.state.target_rotation
    }

    /// Identifier of the latest spin cycle; 0 before the first spin.
    pub fn spin_id(&self) -> u64 {
        self.spin_id
    }

    pub fn state(&self) -> &SpinState {
        &self.state
    }

    pub fn config(&self) -> &SpinConfig {
        &self.config
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Start a spin at timestamp `now`.
    ///
    /// With `auto_stop` the wheel eases to a random stop over
    /// `duration_secs`; otherwise it turns at constant speed until
    /// [`stop_manual`](Self::stop_manual). The duration is ignored by manual
    /// spins.
    ///
    /// Returns `Ok(false)` without touching anything if a spin is already in
    /// progress.
    ///
    /// # Errors
    ///
    /// [`SpinError::InvalidDuration`] if `auto_stop` is set and the duration
    /// is not a positive, finite number of seconds.
    pub fn start_spin<F>(
        &mut self,
        now: Duration,
        duration_secs: f64,
        auto_stop: bool,
        on_complete: F,
    ) -> Result<bool, SpinError>
    where
        F: FnOnce(Option<&Segment>) + 'static,
    {
        if self.is_spinning() {
            self.statistics.increment_counter(Counters::IgnoredStarts);
            debug!("start_spin ignored: spin {} is {}", self.spin_id, self.state.mode);
            return Ok(false);
        }

        let duration = match Duration::try_from_secs_f64(duration_secs) {
            Ok(duration) if !duration.is_zero() => duration,
            _ if auto_stop => {
                return Err(SpinError::InvalidDuration {
                    seconds: duration_secs,
                })
            }
            _ => Duration::ZERO,
        };

        let rotation = fold_turns(self.state.current_rotation);
        self.spin_id += 1;
        self.state = SpinState {
            current_rotation: rotation,
            initial_rotation: Some(rotation),
            start: now,
            duration,
            ..SpinState::default()
        };

        if auto_stop {
            let turns = self.config.min_turns + self.random.next_unit() * self.config.extra_turns;
            self.state.mode = SpinMode::AutoRunning;
            self.state.target_rotation = Some(rotation + turns * FULL_TURN);
            self.statistics.increment_counter(Counters::AutoSpins);
            info!(
                "spin {} started: auto, {:.3} turns over {:?}",
                self.spin_id, turns, duration
            );
        } else {
            self.state.mode = SpinMode::ManualRunning;
            self.state.velocity = self.config.manual_velocity;
            self.statistics.increment_counter(Counters::ManualSpins);
            info!(
                "spin {} started: manual, {} rad/frame",
                self.spin_id, self.state.velocity
            );
        }

        self.statistics.increment_counter(Counters::SpinsStarted);
        self.on_complete = Some(Box::new(on_complete));
        Ok(true)
    }

    /// Begin slowing down a manual spin.
    ///
    /// Only a `ManualRunning` spin reacts; in every other mode, auto spins
    /// included, this does nothing and returns false.
    pub fn stop_manual(&mut self) -> bool {
        if self.state.mode != SpinMode::ManualRunning {
            debug!("stop_manual ignored in mode {}", self.state.mode);
            return false;
        }

        self.state.mode = SpinMode::Decelerating;
        self.statistics.increment_counter(Counters::ManualStops);
        info!(
            "spin {} decelerating from {} rad/frame",
            self.spin_id, self.state.velocity
        );
        true
    }

    /// Advance the animation by one frame at timestamp `now`.
    ///
    /// Returns the outcome on the frame that ends the spin, None on every
    /// other frame and whenever the engine is idle.
    pub fn advance(&mut self, now: Duration) -> Option<SpinOutcome> {
        if !self.is_spinning() {
            return None;
        }
        self.statistics.increment_counter(Counters::Frames);

        match self.state.mode {
            SpinMode::Idle => None,
            SpinMode::AutoRunning => self.advance_auto(now),
            SpinMode::ManualRunning => {
                self.state.current_rotation = fold_turns(self.state.current_rotation + self.state.velocity);
                None
            }
            SpinMode::Decelerating => {
                self.state.velocity *= self.config.decay;
                self.state.current_rotation = fold_turns(self.state.current_rotation + self.state.velocity);
                if self.state.velocity < self.config.stop_velocity {
                    Some(self.finish())
                } else {
                    None
                }
            }
        }
    }

    /// Rotation is recomputed from elapsed wall-clock time on every frame,
    /// so dropped frames do not accumulate drift.
    fn advance_auto(&mut self, now: Duration) -> Option<SpinOutcome> {
        let (Some(initial), Some(target)) = (self.state.initial_rotation, self.state.target_rotation) else {
            return Some(self.finish());
        };

        let elapsed = now.saturating_sub(self.state.start);
        if elapsed >= self.state.duration {
            self.state.current_rotation = target;
            return Some(self.finish());
        }

        let t = elapsed.as_secs_f64() / self.state.duration.as_secs_f64();
        self.state.current_rotation = initial + (target - initial) * ease_out_cubic(t);
        None
    }

    fn finish(&mut self) -> SpinOutcome {
        let final_rotation = self.state.current_rotation;
        let winner = resolve_winner(&self.segments, final_rotation, self.config.pointer_angle).cloned();
        self.state.reset_to_idle();

        self.statistics.increment_counter(Counters::SpinsCompleted);
        match &winner {
            Some(segment) => {
                self.statistics.increment_counter(Counters::Winners);
                info!(
                    "spin {} landed on {:?} ({}) at rotation {:.4}",
                    self.spin_id, segment.name, segment.group, final_rotation
                );
            }
            None => {
                self.statistics.increment_counter(Counters::NoWinner);
                info!(
                    "spin {} ended with no winner among {} segments",
                    self.spin_id,
                    self.segments.len()
                );
            }
        }

        if let Some(callback) = self.on_complete.take() {
            callback(winner.as_ref());
        }

        SpinOutcome {
            spin_id: self.spin_id,
            final_rotation,
            winner,
        }
    }
}

impl Default for SpinEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SpinEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpinEngine")
            .field("segments", &self.segments.len())
            .field("state", &self.state)
            .field("config", &self.config)
            .field("spin_id", &self.spin_id)
            .field("pending_callback", &self.on_complete.is_some())
            .finish()
    }
}
