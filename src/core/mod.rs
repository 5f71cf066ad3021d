//! Core types: seats, teams, moves, state, RNG, configuration, errors.
//!
//! Everything the rules and the search agent pass around lives here.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Capture, Move};
pub use config::{GameConfig, LeftoverFallback, DEFAULT_SWEEP_BONUS};
pub use error::{ErrorKind, Result, ScoponeError};
pub use player::{PlayerId, PlayerMap, Team, TeamMap, SEATS};
pub use rng::GameRng;
pub use state::{GameState, MAX_HAND_SIZE};
