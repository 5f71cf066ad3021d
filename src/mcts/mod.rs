//! Monte Carlo search over macro-children.
//!
//! ## Overview
//!
//! The search decides one move for the seat to act:
//!
//! - **Macro-children**: every legal move is played out to the end of the
//!   round with the other three seats on the greedy policy
//! - **Rollouts**: random moves for the deciding seat, greedy moves for the
//!   rest, until the hand ends
//! - **Aggregation**: each macro-child starts at its round-end reward and
//!   keeps the max of that and the terminal rewards of its own rollouts
//! - **Deterministic**: one seed gives one decision, sequential or parallel
//!
//! ## Usage
//!
//! ```rust
//! use rust_scopone::games::scopone::ScoponeBuilder;
//! use rust_scopone::mcts::{SearchAgent, SearchConfig};
//!
//! let (game, state) = ScoponeBuilder::new().deal(7).build().unwrap();
//!
//! let mut agent = SearchAgent::new(game.engine().clone(), SearchConfig::default().with_budget(50));
//! let mv = agent.tree_search(&state).unwrap();
//! assert!(game.engine().legal_moves(&state).contains(&mv));
//!
//! for (first_move, estimate) in agent.estimates() {
//!     println!("{first_move}: {estimate}");
//! }
//! ```

pub mod config;
pub mod node;
pub mod search;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::{SearchConfig, DEFAULT_BUDGET};
pub use node::{ChildId, MacroChild};
pub use search::{Rollout, SearchAgent};
pub use stats::SearchStats;
pub use tree::MacroTree;
