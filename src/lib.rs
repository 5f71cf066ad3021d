//! # rust-scopone
//!
//! A four-seat Scopone engine with a greedy heuristic and a Monte Carlo
//! search agent.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: applying a move never touches the parent state.
//!    Children are cloned, then changed.
//!
//! 2. **Injected rules**: the point table, sweep bonus and leftover rule live
//!    in one immutable `GameConfig` handed to the engine at construction.
//!
//! 3. **Deterministic**: the greedy policy never uses randomness, and the
//!    search derives every rollout's RNG from one seed.
//!
//! ## Architecture
//!
//! - **Macro-child search**: only the deciding seat's moves are compared;
//!   each one is played out to the end of the round with greedy replies.
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs` for rollouts.
//!
//! - **Integer scores**: rewards are `i64` point differences between teams.
//!
//! ## Modules
//!
//! - `core`: seats, teams, moves, state, RNG, configuration, errors
//! - `cards`: cards, point values, capture combinations
//! - `rules`: legal moves, move application, end-of-hand scoring
//! - `greedy`: the single-ply heuristic for non-agent seats
//! - `mcts`: the macro-child Monte Carlo search
//! - `games`: setup and entry points for a surrounding application

pub mod core;
pub mod cards;
pub mod rules;
pub mod greedy;
pub mod mcts;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap, Team, TeamMap,
    GameRng, GameConfig, LeftoverFallback,
    Capture, Move, GameState,
    ErrorKind, Result, ScoponeError,
};

pub use crate::cards::{Card, Suit, PointTable, CombinationIndex};

pub use crate::rules::{LegalCaptures, ScoponeEngine};

pub use crate::greedy::{GreedyPolicy, OpponentPolicy};

pub use crate::mcts::{
    SearchConfig, SearchAgent, SearchStats,
    MacroTree, MacroChild, Rollout,
};

pub use crate::games::scopone::{Scopone, ScoponeBuilder};
