//! Greedy play for the seats the agent does not control.
//!
//! [`GreedyPolicy`] is used twice: to fast-forward the other three seats when
//! the search builds its macro-children, and as their policy during rollouts.

pub mod policy;

pub use policy::{GreedyPolicy, GreedyReason, OpponentPolicy};
