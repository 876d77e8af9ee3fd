//! Error types for card conversions.
//!
//! Drawing from a supplier never fails; only converting raw numbers into
//! cards can.

use thiserror::Error;

/// Errors that can occur when building a card from numeric parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Suit code outside `1..=4`.
    #[error("invalid suit code {0}, expected 1..=4")]
    InvalidSuit(u8),
    /// Rank value outside `1..=13`.
    #[error("invalid rank value {0}, expected 1..=13")]
    InvalidRank(u8),
    /// Card index outside `0..52`.
    #[error("invalid card index {0}, expected 0..52")]
    InvalidIndex(usize),
}
