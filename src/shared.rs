//! A lock-guarded supplier for use from several threads.

use crate::card::Card;
use crate::options::SupplierOptions;
use crate::supplier::DeckSupplier;
use crate::sync::Mutex;

/// A [`DeckSupplier`] behind a mutex.
///
/// Each draw, including any repopulation it triggers, runs as one critical
/// section, so cards stay unique within a generation no matter how many
/// callers share the deck.
///
/// # Example
///
/// ```
/// use bjdeck::SharedSupplier;
///
/// let shared = SharedSupplier::new(3);
/// let card = shared.draw_card();
/// assert_eq!(shared.dealt_count(), 1);
/// let _ = card;
/// ```
pub struct SharedSupplier {
    inner: Mutex<DeckSupplier>,
}

impl SharedSupplier {
    /// Creates a shared supplier with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_supplier(DeckSupplier::new(seed))
    }

    /// Creates a shared supplier from options.
    #[must_use]
    pub fn with_options(options: SupplierOptions) -> Self {
        Self::from_supplier(DeckSupplier::with_options(options))
    }

    /// Wraps an existing supplier, keeping its current deck state.
    #[must_use]
    pub const fn from_supplier(supplier: DeckSupplier) -> Self {
        Self {
            inner: Mutex::new(supplier),
        }
    }

    /// Draws one card.
    pub fn draw_card(&self) -> Card {
        self.inner.lock().draw_card()
    }

    /// Starts a new generation immediately.
    pub fn reshuffle(&self) {
        self.inner.lock().reshuffle();
    }

    /// Returns the number of cards dealt in the current generation.
    pub fn dealt_count(&self) -> usize {
        self.inner.lock().dealt_count()
    }

    /// Returns the number of cards left in the current generation.
    pub fn remaining(&self) -> usize {
        self.inner.lock().remaining()
    }

    /// Returns the current generation number.
    pub fn generation(&self) -> u64 {
        self.inner.lock().generation()
    }

    /// Unwraps the inner supplier.
    #[must_use]
    pub fn into_inner(self) -> DeckSupplier {
        self.inner.into_inner()
    }
}
