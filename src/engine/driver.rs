// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Frame delivery.
//!
//! A host render loop keeps at most one frame request outstanding. The
//! [`FrameDriver`] models that request as a ticket naming the spin cycle it
//! was scheduled for: when a new cycle starts, tickets from the old one no
//! longer match and are dropped instead of animating the wheel twice.

use std::cell::Cell;
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, warn};

use super::{SpinEngine, SpinOutcome};

/// Frame interval of a 60 Hz display.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

/// Timestamp source for frames.
pub trait Clock {
    /// Time since an arbitrary, fixed origin.
    fn now(&self) -> Duration;

    /// Let `interval` pass before the next frame.
    fn wait(&self, interval: Duration);
}

/// Monotonic wall clock; waiting sleeps the current thread.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn wait(&self, interval: Duration) {
        thread::sleep(interval);
    }
}

/// Clock that only moves when told to. Waiting advances it instantly.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(now: Duration) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    fn wait(&self, interval: Duration) {
        self.advance(interval);
    }
}

/// Holder of the single outstanding frame request.
#[derive(Debug, Default)]
pub struct FrameDriver {
    /// Spin cycle the pending frame belongs to.
    pending: Option<u64>,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a frame for the engine's current cycle, replacing any frame
    /// still pending.
    pub fn schedule(&mut self, engine: &SpinEngine) {
        if let Some(stale) = self.pending.replace(engine.spin_id()) {
            if stale != engine.spin_id() {
                debug!("cancelled pending frame of spin {}", stale);
            }
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deliver the pending frame at `now`.
    ///
    /// The engine advances only if the frame was scheduled for its current,
    /// still running cycle. While the engine keeps spinning the next frame is
    /// scheduled automatically.
    pub fn fire(&mut self, engine: &mut SpinEngine, now: Duration) -> Option<SpinOutcome> {
        let ticket = self.pending.take()?;
        if ticket != engine.spin_id() || !engine.is_spinning() {
            debug!(
                "dropped frame of spin {} (current spin {}, {})",
                ticket,
                engine.spin_id(),
                engine.mode()
            );
            return None;
        }

        let outcome = engine.advance(now);
        if engine.is_spinning() {
            self.pending = Some(ticket);
        }
        outcome
    }
}

/// Drive `engine` frame by frame until its spin ends.
///
/// `on_frame` runs before every frame and may steer the engine, typically by
/// calling `stop_manual`. Gives up after `max_frames` frames and returns
/// None; the engine is then still spinning.
pub fn run_until_idle<C, F>(
    engine: &mut SpinEngine,
    clock: &C,
    interval: Duration,
    max_frames: usize,
    mut on_frame: F,
) -> Option<SpinOutcome>
where
    C: Clock + ?Sized,
    F: FnMut(&mut SpinEngine, usize),
{
    let mut driver = FrameDriver::new();
    driver.schedule(engine);

    for frame in 0..max_frames {
        clock.wait(interval);
        on_frame(engine, frame);
        if let Some(outcome) = driver.fire(engine, clock.now()) {
            return Some(outcome);
        }
        if !driver.is_pending() {
            return None;
        }
    }

    warn!(
        "spin {} still {} after {} frames",
        engine.spin_id(),
        engine.mode(),
        max_frames
    );
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::allocate;
    use crate::engine::FixedRandom;
    use crate::entry::{Entry, Strategy};
    use crate::state::SpinMode;

    fn engine() -> SpinEngine {
        let mut engine = SpinEngine::with_random(Box::new(FixedRandom(0.4)));
        let entries = vec![Entry::new("A", "X", 1.0), Entry::new("B", "Y", 3.0)];
        engine.set_segments(allocate(&entries, Strategy::Individual));
        engine
    }

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::starting_at(Duration::from_secs(1));
        clock.wait(Duration::from_millis(250));
        assert_eq!(clock.now(), Duration::from_millis(1250));
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let first = clock.now();
        assert!(clock.now() >= first);
    }

    #[test]
    fn test_fire_without_schedule() {
        let mut engine = engine();
        let mut driver = FrameDriver::new();
        engine.start_spin(Duration::ZERO, 1.0, false, |_| {}).unwrap();
        assert!(driver.fire(&mut engine, Duration::ZERO).is_none());
        assert_eq!(engine.current_rotation(), 0.0);
    }

    #[test]
    fn test_fire_reschedules_while_spinning() {
        let mut engine = engine();
        let mut driver = FrameDriver::new();
        engine.start_spin(Duration::ZERO, 1.0, false, |_| {}).unwrap();
        driver.schedule(&engine);
        for _ in 0..3 {
            assert!(driver.fire(&mut engine, Duration::ZERO).is_none());
            assert!(driver.is_pending());
        }
        assert!((engine.current_rotation() - 1.5).abs() < 1e-12);

        driver.cancel();
        assert!(driver.fire(&mut engine, Duration::ZERO).is_none());
        assert!((engine.current_rotation() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_stale_frame_is_dropped() {
        let mut engine = engine();
        let mut stale = FrameDriver::new();

        engine.start_spin(Duration::ZERO, 1.0, true, |_| {}).unwrap();
        stale.schedule(&engine);
        engine.advance(Duration::from_secs(1)).unwrap();

        engine.start_spin(Duration::from_secs(2), 1.0, false, |_| {}).unwrap();
        let rotation = engine.current_rotation();
        assert!(stale.fire(&mut engine, Duration::from_secs(3)).is_none());
        assert_eq!(engine.current_rotation(), rotation);
        assert!(!stale.is_pending());
        assert_eq!(engine.mode(), SpinMode::ManualRunning);
    }

    #[test]
    fn test_run_auto_until_idle() {
        let mut engine = engine();
        let clock = ManualClock::new();
        engine.start_spin(clock.now(), 1.0, true, |_| {}).unwrap();
        let target = engine.target_rotation().unwrap();

        let outcome = run_until_idle(&mut engine, &clock, DEFAULT_FRAME_INTERVAL, 1000, |_, _| {}).unwrap();
        assert_eq!(outcome.final_rotation, target);
        assert!(!engine.is_spinning());
        // 1 s at 60 Hz.
        assert!(clock.now() >= Duration::from_secs(1));
        assert!(clock.now() < Duration::from_millis(1020));
    }

    #[test]
    fn test_run_manual_with_stop() {
        let mut engine = engine();
        let clock = ManualClock::new();
        engine.start_spin(clock.now(), 1.0, false, |_| {}).unwrap();

        let outcome = run_until_idle(&mut engine, &clock, DEFAULT_FRAME_INTERVAL, 1000, |engine, frame| {
            if frame == 10 {
                engine.stop_manual();
            }
        });
        assert!(outcome.is_some());
        assert_eq!(engine.mode(), SpinMode::Idle);
    }

    #[test]
    fn test_run_gives_up() {
        let mut engine = engine();
        let clock = ManualClock::new();
        engine.start_spin(clock.now(), 1.0, false, |_| {}).unwrap();
        assert!(run_until_idle(&mut engine, &clock, DEFAULT_FRAME_INTERVAL, 50, |_, _| {}).is_none());
        assert!(engine.is_spinning());
    }

    #[test]
    fn test_run_idle_engine() {
        let mut engine = engine();
        let clock = ManualClock::new();
        assert!(run_until_idle(&mut engine, &clock, DEFAULT_FRAME_INTERVAL, 50, |_, _| {}).is_none());
    }
}
