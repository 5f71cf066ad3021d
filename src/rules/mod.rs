//! Scopone rules.
//!
//! `ScoponeEngine` defines:
//! - Legal captures and moves for each state
//! - How a move changes the state
//! - When the hand ends and who gets the leftover table cards
//!
//! Search and policies call into the engine and never interpret capture
//! rules directly.

pub mod engine;

pub use engine::{enumerate_captures, expand_moves, LegalCaptures, ScoponeEngine};
