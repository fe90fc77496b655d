//! The main loop clock: total tick count and long-tick cadence.

use crate::constants::TICKS_PER_LONG_TICK;
use serde::{Deserialize, Serialize};

/// Main loop service. The external driver calls [`tick`](Self::tick) at a
/// fixed real-time interval; every `TICKS_PER_LONG_TICK` ticks it reports a
/// long tick, on which slower systems (achievements) run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MainLoopService {
    /// Ticks elapsed across all lives. One tick is one in-game day.
    pub total_ticks: u64,
    ticks_since_long_tick: u64,
}

impl MainLoopService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the clock by one tick. Returns true when this tick is a
    /// long-tick boundary.
    pub fn tick(&mut self) -> bool {
        self.total_ticks += 1;
        self.ticks_since_long_tick += 1;
        if self.ticks_since_long_tick >= TICKS_PER_LONG_TICK {
            self.ticks_since_long_tick = 0;
            true
        } else {
            false
        }
    }
}
