//! Four-seat Scopone.
//!
//! Seats 0 and 2 play against seats 1 and 3. Each seat holds up to ten cards
//! and plays one per turn, capturing table cards by equal rank or by rank
//! sum. The hand ends when the seat to move has nothing left.
//!
//! [`Scopone`] exposes the three calls a surrounding application needs:
//! `initialize`, `agent_decide` and `apply_external_move`.

mod game;

pub use game::{Scopone, ScoponeBuilder, DEAL_SIZE};
