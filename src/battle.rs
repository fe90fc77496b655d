//! Battle progress counters read by the achievement tracker.

use serde::{Deserialize, Serialize};

/// Battle service. Combat itself is simulated elsewhere; this records the
/// lifetime outcomes achievements care about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattleService {
    /// Monsters killed while out looking for trouble, across all lives.
    pub trouble_kills: u64,
}

impl BattleService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_trouble_kill(&mut self) {
        self.trouble_kills += 1;
    }
}
