//! Self-check for the deck supplier: deals a full deck and reports on it.

use std::collections::HashMap;

use bjdeck::{DECK_SIZE, DeckSupplier, RANK_COUNT, Rank, SUIT_COUNT, Suit};
use tracing::info;
use tracing_subscriber::EnvFilter;

const EXTRA_DRAWS: usize = 200;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut supplier = DeckSupplier::initialize();
    info!(seed = supplier.seed(), "checking deck supplier");

    let mut suits: HashMap<Suit, usize> = HashMap::new();
    let mut ranks: HashMap<Rank, usize> = HashMap::new();

    let first = supplier.draw_card();
    println!("{first}");
    *suits.entry(first.suit).or_default() += 1;
    *ranks.entry(first.rank).or_default() += 1;

    for card in supplier.draws().take(DECK_SIZE - 1) {
        println!("{card}");
        *suits.entry(card.suit).or_default() += 1;
        *ranks.entry(card.rank).or_default() += 1;
    }
    println!("--------------------------------");

    let fifty_third = supplier.draw_card();
    if fifty_third == first {
        // Legal: the 53rd card belongs to a fresh deck.
        println!("-Note: 53rd card repeats the first card: {fifty_third}");
    } else {
        println!("-Good: 1st and 53rd cards are different");
    }

    let mut all_good = true;
    for suit in Suit::ALL {
        let seen = suits.get(&suit).copied().unwrap_or(0);
        if seen != RANK_COUNT {
            println!("-Bad: {suit} had {seen} cards instead of {RANK_COUNT}");
            all_good = false;
        }
    }
    if all_good {
        println!("-Good: {RANK_COUNT} of every suit seen");
    }

    all_good = true;
    for rank in Rank::ALL {
        let seen = ranks.get(&rank).copied().unwrap_or(0);
        if seen != SUIT_COUNT {
            println!("-Bad: rank {rank} had {seen} cards instead of {SUIT_COUNT}");
            all_good = false;
        }
    }
    if all_good {
        println!("-Good: {SUIT_COUNT} of every rank seen");
    }

    // Typed cards cannot carry out-of-range values; round-trip the raw codes instead.
    all_good = true;
    for (offset, card) in supplier.draws().take(EXTRA_DRAWS).enumerate() {
        let suit_ok = Suit::try_from(card.suit.code()) == Ok(card.suit);
        let rank_ok = Rank::try_from(card.rank.value()) == Ok(card.rank);
        if !(suit_ok && rank_ok) {
            println!("-Bad card seen on deal {}", DECK_SIZE + 2 + offset);
            all_good = false;
        }
    }
    if all_good {
        println!("-Good: no bad cards after {EXTRA_DRAWS} more cards");
    }

    info!(generation = supplier.generation(), "check complete");
}
