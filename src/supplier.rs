//! The deck supplier: cards drawn without replacement from a self-reshuffling deck.

use core::iter::FusedIterator;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::card::{Card, DECK_SIZE};
use crate::options::{ReshuffleTiming, SupplierOptions};

/// A source of playing cards drawn without replacement from a 52-card deck.
///
/// Every card returned since the last reshuffle is distinct. Once all 52
/// cards of a generation have been dealt, the next draw silently starts a
/// new generation, so [`draw_card`](Self::draw_card) never runs dry.
///
/// # Example
///
/// ```
/// use bjdeck::DeckSupplier;
///
/// let mut supplier = DeckSupplier::new(42);
/// let first = supplier.draw_card();
/// let second = supplier.draw_card();
/// assert_ne!(first, second);
/// ```
#[derive(Debug, Clone)]
pub struct DeckSupplier {
    /// Random number generator.
    rng: ChaCha8Rng,
    /// Seed the generator was created with.
    seed: u64,
    /// When exhaustion is flagged.
    timing: ReshuffleTiming,
    /// Dealt membership, indexed by [`Card::index`].
    dealt: [bool; DECK_SIZE],
    /// Cards dealt since the last population.
    deal_count: usize,
    /// Whether the deck holds a live, partially dealt population.
    shuffled: bool,
    /// Number of populations performed.
    generation: u64,
}

impl DeckSupplier {
    /// Creates a supplier with the given seed and eager reshuffling.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_options(SupplierOptions::default().with_seed(seed))
    }

    /// Creates a supplier from options.
    ///
    /// An unset seed is resolved once, here; the supplier is fully seeded
    /// before its first draw.
    #[must_use]
    pub fn with_options(options: SupplierOptions) -> Self {
        let seed = options.resolve_seed();
        debug!(seed, reshuffle = ?options.reshuffle, "deck supplier created");

        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            timing: options.reshuffle,
            dealt: [false; DECK_SIZE],
            deal_count: 0,
            shuffled: false,
            generation: 0,
        }
    }

    /// Creates a supplier seeded from a time-varying source.
    ///
    /// Without the `std` feature there is no clock, and the supplier is
    /// seeded with [`DEFAULT_SEED`](crate::options::DEFAULT_SEED) instead.
    #[must_use]
    pub fn initialize() -> Self {
        Self::with_options(SupplierOptions::default())
    }

    /// Draws one card.
    ///
    /// The card is distinct from every card drawn since the last reshuffle.
    /// If the previous draw dealt the last card of a generation, the deck
    /// is repopulated first.
    pub fn draw_card(&mut self) -> Card {
        if self.needs_population() {
            self.populate();
        }

        let index = self.sample_undealt();
        self.dealt[index] = true;
        self.deal_count += 1;
        debug_assert_eq!(
            self.deal_count,
            self.dealt.iter().filter(|&&dealt| dealt).count()
        );

        if self.deal_count == DECK_SIZE && self.timing == ReshuffleTiming::Eager {
            self.shuffled = false;
        }

        let card = Card::at(index);
        trace!(
            suit = card.suit.name(),
            rank = card.rank.value(),
            dealt = self.deal_count,
            "card dealt"
        );
        card
    }

    /// Returns an endless iterator of drawn cards.
    ///
    /// ```
    /// use bjdeck::DeckSupplier;
    ///
    /// let mut supplier = DeckSupplier::new(1);
    /// assert_eq!(supplier.draws().take(60).count(), 60);
    /// ```
    pub const fn draws(&mut self) -> Draws<'_> {
        Draws { supplier: self }
    }

    /// Starts a new generation immediately, returning all cards to the deck.
    pub fn reshuffle(&mut self) {
        self.populate();
    }

    /// Returns the number of cards dealt in the current generation.
    #[must_use]
    pub const fn dealt_count(&self) -> usize {
        self.deal_count
    }

    /// Returns the number of cards left before the current generation is exhausted.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        DECK_SIZE - self.deal_count
    }

    /// Returns whether the deck holds a live population.
    ///
    /// This is `false` before the first draw, and, with
    /// [`ReshuffleTiming::Eager`], right after the 52nd card of a generation.
    #[must_use]
    pub const fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    /// Returns whether the card has been dealt in the current generation.
    #[must_use]
    pub const fn is_dealt(&self, card: Card) -> bool {
        self.dealt[card.index()]
    }

    /// Returns the seed the generator was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the reshuffle timing.
    #[must_use]
    pub const fn reshuffle_timing(&self) -> ReshuffleTiming {
        self.timing
    }

    /// Returns how many times the deck has been populated.
    ///
    /// The first draw populates generation 1.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    const fn needs_population(&self) -> bool {
        // Lazy timing leaves `shuffled` set on an exhausted deck.
        !self.shuffled || self.deal_count == DECK_SIZE
    }

    fn populate(&mut self) {
        self.dealt = [false; DECK_SIZE];
        self.deal_count = 0;
        self.shuffled = true;
        self.generation += 1;
        debug!(generation = self.generation, "deck populated");
    }

    /// Rejection-samples an index that is not yet dealt.
    ///
    /// Terminates because at least one card is undealt whenever this runs.
    fn sample_undealt(&mut self) -> usize {
        debug_assert!(self.deal_count < DECK_SIZE);
        loop {
            let index = self.rng.random_range(0..DECK_SIZE);
            if !self.dealt[index] {
                return index;
            }
        }
    }
}

impl Default for DeckSupplier {
    fn default() -> Self {
        Self::initialize()
    }
}

/// Endless iterator over cards drawn from a [`DeckSupplier`].
///
/// Created by [`DeckSupplier::draws`].
#[derive(Debug)]
pub struct Draws<'a> {
    supplier: &'a mut DeckSupplier,
}

impl Iterator for Draws<'_> {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        Some(self.supplier.draw_card())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for Draws<'_> {}
