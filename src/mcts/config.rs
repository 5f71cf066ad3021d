//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Default number of rollouts per decision.
pub const DEFAULT_BUDGET: u32 = 500;

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Rollouts per decision (default: 500).
    /// A count, not a time limit: every rollout runs to the end of the hand.
    pub budget: u32,

    /// Random seed for self-move sampling.
    /// Same seed and budget produce the same decision.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            seed: 42,
        }
    }
}

impl SearchConfig {
    /// Create a new config with a custom rollout budget.
    pub fn with_budget(mut self, budget: u32) -> Self {
        self.budget = budget;
        self
    }

    /// Create a new config with a custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
