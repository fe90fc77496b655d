//! Activity day counters read by the achievement tracker.

use serde::{Deserialize, Serialize};

/// Activity service. The activity scheduler lives outside this crate; it
/// reports completed days here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityService {
    /// Days spent doing odd jobs, across all lives.
    pub odd_job_days: u64,
    /// Days spent begging, across all lives.
    pub begging_days: u64,
}

impl ActivityService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_odd_job_day(&mut self) {
        self.odd_job_days += 1;
    }

    pub fn record_begging_day(&mut self) {
        self.begging_days += 1;
    }
}
