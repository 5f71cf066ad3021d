//! Game configuration.
//!
//! The rules read a single immutable `GameConfig`:
//! - `values`: the point table for the 40 cards
//! - `sweep_bonus`: extra points for clearing the table
//! - `leftover_fallback`: who gets the table when a hand ends without captures
//!
//! Configs are serde-serializable and can be loaded from JSON. Card values
//! and the sweep bonus are never negative, so team scores only grow.

use serde::{Deserialize, Serialize};

use crate::cards::{PointTable, MAX_POINTS};

use super::error::{Result, ScoponeError};
use super::player::Team;

/// Points awarded for a sweep, in point-table units.
///
/// Large enough to outweigh any single ordinary card, smaller than the two
/// top cards.
pub const DEFAULT_SWEEP_BONUS: i64 = 100;

/// Who receives the cards left on the table at the end of a hand when
/// nobody captured anything during it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeftoverFallback {
    /// Credit the dealing side, [`Team::Deck`].
    #[default]
    DealingTeam,
    /// Nobody scores them.
    Nobody,
}

impl LeftoverFallback {
    /// The team credited under this fallback, if any.
    #[must_use]
    pub fn team(self) -> Option<Team> {
        match self {
            LeftoverFallback::DealingTeam => Some(Team::Deck),
            LeftoverFallback::Nobody => None,
        }
    }
}

/// Complete rules configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Point value of every card.
    #[serde(default)]
    pub values: PointTable,

    /// Bonus for capturing the whole table with a move that does not end the hand.
    #[serde(default = "default_sweep_bonus")]
    pub sweep_bonus: i64,

    /// Leftover policy for hands without any capture.
    #[serde(default)]
    pub leftover_fallback: LeftoverFallback,
}

fn default_sweep_bonus() -> i64 {
    DEFAULT_SWEEP_BONUS
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            values: PointTable::standard(),
            sweep_bonus: DEFAULT_SWEEP_BONUS,
            leftover_fallback: LeftoverFallback::default(),
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values that the point table cannot check itself.
    pub fn validate(&self) -> Result<()> {
        if !(0..=MAX_POINTS).contains(&self.sweep_bonus) {
            return Err(ScoponeError::SweepBonusOutOfRange {
                bonus: self.sweep_bonus,
            });
        }
        Ok(())
    }

    /// Use a different point table.
    #[must_use]
    pub fn with_values(mut self, values: PointTable) -> Self {
        self.values = values;
        self
    }

    /// Use a different sweep bonus.
    #[must_use]
    pub fn with_sweep_bonus(mut self, bonus: i64) -> Self {
        self.sweep_bonus = bonus;
        self
    }

    /// Use a different leftover fallback.
    #[must_use]
    pub fn with_leftover_fallback(mut self, fallback: LeftoverFallback) -> Self {
        self.leftover_fallback = fallback;
        self
    }
}
