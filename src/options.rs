//! Supplier configuration options.

/// Seed used when no seed is given and no clock is available (`no_std`).
pub const DEFAULT_SEED: u64 = 0x5EED_CA8D_0052_DECC;

/// When an exhausted deck is flagged for repopulation.
///
/// Both timings deal identical card sequences for the same seed; they only
/// differ in what [`DeckSupplier::is_shuffled`](crate::DeckSupplier::is_shuffled)
/// reports between the 52nd and 53rd draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReshuffleTiming {
    /// Flag the deck unshuffled the instant its 52nd card is dealt.
    #[default]
    Eager,
    /// Leave the deck flagged shuffled and notice exhaustion at the start of
    /// the next draw.
    Lazy,
}

/// Configuration options for a [`DeckSupplier`](crate::DeckSupplier).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjdeck::{ReshuffleTiming, SupplierOptions};
///
/// let options = SupplierOptions::default()
///     .with_seed(7)
///     .with_reshuffle(ReshuffleTiming::Lazy);
/// assert_eq!(options.seed, Some(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SupplierOptions {
    /// Seed for the random number generator.
    ///
    /// `None` seeds from the system clock with the `std` feature, or from
    /// [`DEFAULT_SEED`] without it.
    pub seed: Option<u64>,
    /// Reshuffle timing.
    pub reshuffle: ReshuffleTiming,
}

impl SupplierOptions {
    /// Sets a fixed seed, making the dealt sequence reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use bjdeck::SupplierOptions;
    ///
    /// let options = SupplierOptions::default().with_seed(42);
    /// assert_eq!(options.seed, Some(42));
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the reshuffle timing.
    #[must_use]
    pub const fn with_reshuffle(mut self, reshuffle: ReshuffleTiming) -> Self {
        self.reshuffle = reshuffle;
        self
    }

    /// Returns the configured seed, or a fresh one if none was set.
    #[must_use]
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(fallback_seed)
    }
}

#[cfg(feature = "std")]
fn fallback_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(DEFAULT_SEED, |elapsed| {
            elapsed.as_secs() ^ u64::from(elapsed.subsec_nanos()).rotate_left(32)
        })
}

#[cfg(not(feature = "std"))]
const fn fallback_seed() -> u64 {
    DEFAULT_SEED
}
