// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Weighted prize wheel.
//!
//! Turns a list of named, grouped, weighted entries into angular segments,
//! animates the wheel's rotation and reports which segment stops under the
//! pointer. Drawing and UI wiring are left to the host; this crate supplies
//! the numbers they need.
//!
//! # Architecture
//!
//! Data flows through three stages:
//!
//! 1. **entry**: parse `Name, Group, Weight` lines into [`Entry`] values,
//!    coercing missing groups to `"Default"` and unusable weights to 1
//! 2. **allocation**: partition the circle into [`Segment`]s, either
//!    proportionally to weight ([`Strategy::Individual`]) or with an equal
//!    share per group ([`Strategy::Group`])
//! 3. **engine**: the [`SpinEngine`] state machine animates auto and manual
//!    spins, one `advance(now)` call per frame, and resolves the winner when
//!    the wheel comes to rest
//!
//! # Timing
//!
//! The engine is a pure step function over timestamps. Hosts with a render
//! loop call `advance` from it; headless hosts use
//! [`engine::run_until_idle`] with a [`engine::ManualClock`] or
//! [`engine::SystemClock`].
//!
//! # Example
//!
//! ```
//! use prize_wheel::engine::{run_until_idle, Clock, FixedRandom, ManualClock, DEFAULT_FRAME_INTERVAL};
//! use prize_wheel::{allocate, parse_entries, SpinEngine, Strategy};
//!
//! let entries = parse_entries("Alice, Red, 1\nBob, Red, 1\nCarol, Blue, 2\n");
//! let mut engine = SpinEngine::with_random(Box::new(FixedRandom(0.5)));
//! engine.set_segments(allocate(&entries, Strategy::Group));
//!
//! let clock = ManualClock::new();
//! engine.start_spin(clock.now(), 3.0, true, |_| {}).unwrap();
//! let outcome = run_until_idle(&mut engine, &clock, DEFAULT_FRAME_INTERVAL, 10_000, |_, _| {});
//! assert!(outcome.unwrap().winner.is_some());
//! ```

pub mod allocation;
pub mod config;
pub mod engine;
pub mod entry;
pub mod geometry;
pub mod state;

// Re-export commonly used types
pub use allocation::{allocate, Segment};
pub use config::SpinConfig;
pub use engine::{SpinEngine, SpinError, SpinOutcome};
pub use entry::{parse_entries, Entry, Strategy};
pub use state::SpinMode;
