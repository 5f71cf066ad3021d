//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one decision.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Rollouts performed.
    pub rollouts: u32,

    /// Macro-children built by expansion.
    pub macro_children: u32,

    /// Moves played across all rollouts, every seat included.
    pub rollout_plies: u64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate rollouts per second.
    #[must_use]
    pub fn rollouts_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.rollouts as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Calculate the average number of moves per rollout.
    #[must_use]
    pub fn avg_rollout_length(&self) -> f64 {
        if self.rollouts == 0 {
            0.0
        } else {
            self.rollout_plies as f64 / self.rollouts as f64
        }
    }
}
