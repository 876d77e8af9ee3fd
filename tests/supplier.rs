//! Deck supplier integration tests.

use std::collections::{HashMap, HashSet};

use bjdeck::{Card, DECK_SIZE, DeckSupplier, Rank, ReshuffleTiming, Suit, SupplierOptions};
use rstest::rstest;

fn deal_generation(supplier: &mut DeckSupplier) -> Vec<Card> {
    supplier.draws().take(DECK_SIZE).collect()
}

fn supplier(seed: u64, timing: ReshuffleTiming) -> DeckSupplier {
    DeckSupplier::with_options(SupplierOptions::default().with_seed(seed).with_reshuffle(timing))
}

#[rstest]
fn generation_covers_full_deck(
    #[values(0, 1, 42, 9_999)] seed: u64,
    #[values(ReshuffleTiming::Eager, ReshuffleTiming::Lazy)] timing: ReshuffleTiming,
) {
    let mut supplier = supplier(seed, timing);
    let dealt = deal_generation(&mut supplier);

    let unique: HashSet<Card> = dealt.iter().copied().collect();
    let canonical: HashSet<Card> = Card::all().collect();
    assert_eq!(dealt.len(), DECK_SIZE);
    assert_eq!(unique, canonical);
}

#[test]
fn suits_and_ranks_are_balanced() {
    let mut supplier = DeckSupplier::new(7);
    let dealt = deal_generation(&mut supplier);

    let mut suits: HashMap<Suit, usize> = HashMap::new();
    let mut ranks: HashMap<Rank, usize> = HashMap::new();
    for card in &dealt {
        *suits.entry(card.suit).or_default() += 1;
        *ranks.entry(card.rank).or_default() += 1;
    }

    assert_eq!(suits.len(), 4);
    assert!(suits.values().all(|&count| count == 13));
    assert_eq!(ranks.len(), 13);
    assert!(ranks.values().all(|&count| count == 4));
}

#[test]
fn fifty_third_draw_starts_new_generation() {
    let mut supplier = DeckSupplier::new(11);
    deal_generation(&mut supplier);
    assert_eq!(supplier.dealt_count(), DECK_SIZE);
    assert_eq!(supplier.remaining(), 0);
    assert_eq!(supplier.generation(), 1);

    let card = supplier.draw_card();
    assert!(Suit::ALL.contains(&card.suit));
    assert!(Rank::ALL.contains(&card.rank));
    assert_eq!(supplier.dealt_count(), 1);
    assert_eq!(supplier.generation(), 2);
    assert!(supplier.is_dealt(card));
}

#[test]
fn every_generation_is_a_permutation() {
    let mut supplier = DeckSupplier::new(3);
    let canonical: HashSet<Card> = Card::all().collect();

    for generation in 1..=5 {
        let dealt: HashSet<Card> = deal_generation(&mut supplier).into_iter().collect();
        assert_eq!(dealt, canonical);
        assert_eq!(supplier.generation(), generation);
    }
}

#[test]
fn sustained_draws_stay_valid() {
    let mut supplier = DeckSupplier::new(2024);
    let canonical: HashSet<Card> = Card::all().collect();

    for card in supplier.draws().take(252) {
        assert!(canonical.contains(&card));
        assert!((1..=13).contains(&card.rank.value()));
        assert!((1..=4).contains(&card.suit.code()));
    }
    assert_eq!(supplier.dealt_count(), 252 % DECK_SIZE);
}

#[test]
fn eager_timing_flags_exhaustion_immediately() {
    let mut supplier = supplier(5, ReshuffleTiming::Eager);
    assert!(!supplier.is_shuffled());

    supplier.draw_card();
    assert!(supplier.is_shuffled());

    supplier.draws().take(DECK_SIZE - 1).for_each(drop);
    assert!(!supplier.is_shuffled());

    supplier.draw_card();
    assert!(supplier.is_shuffled());
}

#[test]
fn lazy_timing_flags_exhaustion_on_next_draw() {
    let mut supplier = supplier(5, ReshuffleTiming::Lazy);
    deal_generation(&mut supplier);
    assert!(supplier.is_shuffled());
    assert_eq!(supplier.remaining(), 0);

    supplier.draw_card();
    assert_eq!(supplier.dealt_count(), 1);
    assert_eq!(supplier.generation(), 2);
}

#[test]
fn timings_deal_identical_sequences() {
    let mut eager = supplier(77, ReshuffleTiming::Eager);
    let mut lazy = supplier(77, ReshuffleTiming::Lazy);

    let eager_cards: Vec<Card> = eager.draws().take(3 * DECK_SIZE + 5).collect();
    let lazy_cards: Vec<Card> = lazy.draws().take(3 * DECK_SIZE + 5).collect();
    assert_eq!(eager_cards, lazy_cards);
}

#[test]
fn same_seed_is_deterministic() {
    let mut a = DeckSupplier::new(42);
    let mut b = DeckSupplier::new(42);
    assert_eq!(deal_generation(&mut a), deal_generation(&mut b));
    assert_eq!(a.seed(), 42);
}

#[test]
fn different_seeds_differ() {
    let mut a = DeckSupplier::new(1);
    let mut b = DeckSupplier::new(2);
    assert_ne!(deal_generation(&mut a), deal_generation(&mut b));
}

#[test]
fn explicit_reshuffle_returns_cards_to_deck() {
    let mut supplier = DeckSupplier::new(8);
    let first: Vec<Card> = supplier.draws().take(10).collect();
    assert_eq!(supplier.remaining(), DECK_SIZE - 10);

    supplier.reshuffle();
    assert_eq!(supplier.dealt_count(), 0);
    assert!(supplier.is_shuffled());
    assert!(first.iter().all(|&card| !supplier.is_dealt(card)));

    let rest: HashSet<Card> = deal_generation(&mut supplier).into_iter().collect();
    assert_eq!(rest.len(), DECK_SIZE);
}

#[test]
fn fresh_supplier_is_unshuffled() {
    let supplier = DeckSupplier::new(0);
    assert!(!supplier.is_shuffled());
    assert_eq!(supplier.dealt_count(), 0);
    assert_eq!(supplier.remaining(), DECK_SIZE);
    assert_eq!(supplier.generation(), 0);
    assert_eq!(supplier.reshuffle_timing(), ReshuffleTiming::Eager);
}

#[test]
fn initialize_deals_a_full_deck() {
    let mut supplier = DeckSupplier::initialize();
    let dealt: HashSet<Card> = deal_generation(&mut supplier).into_iter().collect();
    assert_eq!(dealt.len(), DECK_SIZE);
}

#[test]
fn unseeded_options_resolve_a_seed() {
    let mut supplier = DeckSupplier::with_options(SupplierOptions::default());
    let mut copy = DeckSupplier::new(supplier.seed());
    assert_eq!(deal_generation(&mut supplier), deal_generation(&mut copy));
}
