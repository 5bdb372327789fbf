// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the engine and incremented as spins start,
//! advance and finish.

use strum::EnumCount;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

#[derive(EnumCountMacro, EnumIter, Display, Debug, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    SpinsStarted,
    AutoSpins,
    ManualSpins,
    /// `start_spin` calls ignored because a spin was in progress.
    IgnoredStarts,
    ManualStops,
    Frames,
    SpinsCompleted,
    Winners,
    NoWinner,
}

const COUNT: usize = Counters::COUNT;

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}
