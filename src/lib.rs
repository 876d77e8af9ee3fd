//! A self-reshuffling 52-card supplier for terminal card games, with optional
//! `no_std` support.
//!
//! The crate provides a [`DeckSupplier`] that hands out one card at a time,
//! never repeating a card until all 52 have been dealt, and then silently
//! starts over with a fresh deck. It knows nothing about hands, scores or
//! game rules.
//!
//! # Example
//!
//! ```
//! use bjdeck::{DeckSupplier, DECK_SIZE};
//! use std::collections::HashSet;
//!
//! let mut supplier = DeckSupplier::new(42);
//! let dealt: HashSet<_> = supplier.draws().take(DECK_SIZE).collect();
//! assert_eq!(dealt.len(), DECK_SIZE);
//!
//! // The 53rd draw starts a new deck.
//! let _ = supplier.draw_card();
//! assert_eq!(supplier.dealt_count(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "spin")))]
compile_error!(
    "`std` is disabled but `spin` feature is not enabled. Enable `spin` or keep `std` enabled."
);

pub mod card;
pub mod error;
pub mod options;
pub mod shared;
pub mod supplier;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANK_COUNT, Rank, SUIT_COUNT, Suit};
pub use error::CardError;
pub use options::{ReshuffleTiming, SupplierOptions};
pub use shared::SharedSupplier;
pub use supplier::{DeckSupplier, Draws};
