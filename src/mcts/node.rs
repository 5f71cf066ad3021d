//! Macro-children: the candidates the search compares.
//!
//! A macro-child is one full round seen from the deciding seat: its first
//! move, then the other seats' greedy replies, up to the point where the
//! deciding seat is to move again (or the hand ends).

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Move};

/// Index of a macro-child in its [`MacroTree`](super::MacroTree).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChildId(pub u32);

impl ChildId {
    /// Create a new child ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ChildId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ChildId({})", self.0)
    }
}

/// One candidate decision and what is known about it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MacroChild {
    /// The deciding seat's move that starts this round.
    pub first_move: Move,

    /// State after the round has been played out.
    pub state: GameState,

    /// Reward of `state` for the deciding team.
    pub baseline: i64,

    /// Best known reward: the baseline, raised by any better terminal reward
    /// seen in a rollout started from this child.
    pub best: i64,

    /// Rollouts started from this child.
    pub visits: u32,
}

impl MacroChild {
    /// Create an unvisited child seeded with its baseline.
    pub fn new(first_move: Move, state: GameState, baseline: i64) -> Self {
        Self {
            first_move,
            state,
            baseline,
            best: baseline,
            visits: 0,
        }
    }

    /// Fold in the terminal reward of a rollout that started here.
    pub fn record(&mut self, reward: i64) {
        self.visits += 1;
        self.best = self.best.max(reward);
    }

    /// Best known reward. Never below the baseline.
    #[must_use]
    pub fn estimate(&self) -> i64 {
        self.best
    }

    /// Check if any rollout has started from this child.
    #[must_use]
    pub fn is_visited(&self) -> bool {
        self.visits > 0
    }
}
