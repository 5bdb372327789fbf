// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Random sources for picking auto-spin targets.
//!
//! The engine only ever asks for one uniform value in `[0, 1)` per auto
//! spin. Hiding that behind [`RandomSource`] lets tests pin the target
//! rotation and assert exact winners.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniform values in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Adapter from any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl RngSource<ThreadRng> {
    /// Thread-local generator, seeded from the OS.
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }
}

/// Always returns the same value, clamped into `[0, 1)`.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        if self.0.is_nan() {
            0.0
        } else {
            self.0.clamp(0.0, 1.0 - f64::EPSILON)
        }
    }
}
