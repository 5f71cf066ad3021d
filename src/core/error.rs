//! Error types.
//!
//! Every failure is one of three kinds:
//! - **Domain violations**: a move that does not fit the state it is applied to.
//! - **Configuration errors**: a card or value table outside the 40-card domain.
//! - **Usage errors**: misuse of the public entry points.
//!
//! Nothing is retried. The engine is deterministic for a given seed, so an
//! error always points at the caller.

use thiserror::Error;

use crate::cards::Card;

use super::player::PlayerId;

/// Broad classification of a [`ScoponeError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    DomainViolation,
    Configuration,
    Usage,
}

#[derive(Debug, Error)]
pub enum ScoponeError {
    #[error("{card} is not in the hand of {player}")]
    CardNotInHand { card: Card, player: PlayerId },

    #[error("{card} is not on the table")]
    CaptureNotOnTable { card: Card },

    #[error("captured ranks sum to {captured}, but {played} has rank {}", .played.rank())]
    RankMismatch { played: Card, captured: u32 },

    #[error("{card} can capture, so it cannot be placed")]
    CaptureAvailable { card: Card },

    #[error("a combination capture needs at least two distinct cards, got {len}")]
    InvalidCombination { len: usize },

    #[error("card ({rank}, {suit}) is outside the 40-card domain")]
    CardOutOfDomain { rank: u8, suit: u8 },

    #[error("point table is missing {missing} of 40 cards")]
    IncompletePointTable { missing: usize },

    #[error("point table lists {card} more than once")]
    DuplicatePointEntry { card: Card },

    #[error("{card} is worth {value}, card values must be between 0 and {}", crate::cards::MAX_POINTS)]
    PointValueOutOfRange { card: Card, value: i64 },

    #[error("sweep bonus {bonus} must be between 0 and {}", crate::cards::MAX_POINTS)]
    SweepBonusOutOfRange { bonus: i64 },

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("seat {seat} does not exist")]
    InvalidSeat { seat: u8 },

    #[error("cannot decide a move in a terminal state")]
    TerminalDecision,

    #[error("{card} appears more than once across hands, table and deck")]
    DuplicateCard { card: Card },

    #[error("{player} holds {len} cards, at most 10 are allowed")]
    HandTooLarge { player: PlayerId, len: usize },

    #[error("{player} has no legal move")]
    NoLegalMove { player: PlayerId },
}

impl ScoponeError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScoponeError::CardNotInHand { .. }
            | ScoponeError::CaptureNotOnTable { .. }
            | ScoponeError::RankMismatch { .. }
            | ScoponeError::CaptureAvailable { .. }
            | ScoponeError::InvalidCombination { .. } => ErrorKind::DomainViolation,

            ScoponeError::CardOutOfDomain { .. }
            | ScoponeError::IncompletePointTable { .. }
            | ScoponeError::DuplicatePointEntry { .. }
            | ScoponeError::PointValueOutOfRange { .. }
            | ScoponeError::SweepBonusOutOfRange { .. }
            | ScoponeError::ConfigParse(_) => ErrorKind::Configuration,

            ScoponeError::InvalidSeat { .. }
            | ScoponeError::TerminalDecision
            | ScoponeError::DuplicateCard { .. }
            | ScoponeError::HandTooLarge { .. }
            | ScoponeError::NoLegalMove { .. } => ErrorKind::Usage,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoponeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        let card = Card::new(7, 1).unwrap();
        let err = ScoponeError::CaptureNotOnTable { card };
        assert_eq!(err.kind(), ErrorKind::DomainViolation);
        assert_eq!(
            ScoponeError::CardOutOfDomain { rank: 11, suit: 1 }.kind(),
            ErrorKind::Configuration
        );
        assert_eq!(ScoponeError::TerminalDecision.kind(), ErrorKind::Usage);
        assert_eq!(
            ScoponeError::SweepBonusOutOfRange { bonus: -1 }.kind(),
            ErrorKind::Configuration
        );
    }

    #[test]
    fn test_rank_mismatch_message() {
        let played = Card::new(7, 2).unwrap();
        let err = ScoponeError::RankMismatch { played, captured: 6 };
        assert_eq!(
            err.to_string(),
            "captured ranks sum to 6, but 7 of Coppe has rank 7"
        );
    }
}
