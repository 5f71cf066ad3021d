//! Card model: cards, point values, and capture combinations.
//!
//! ## Key Types
//!
//! - `Card`: rank (1-10) and `Suit`, validated on construction
//! - `PointTable`: fixed value for each of the 40 cards, injected as config
//! - `CombinationIndex`: multi-card groups of a table, bucketed by rank sum

pub mod card;
pub mod combinations;
pub mod values;

pub use card::{rank_sum, Card, Suit, DECK_SIZE, MAX_RANK};
pub use combinations::{combinations_summing_to, CardCombo, CombinationIndex};
pub use values::{PointEntry, PointTable, MAX_POINTS};
