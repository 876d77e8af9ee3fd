//! Card type tests.

use std::collections::HashSet;

use bjdeck::{Card, CardError, DECK_SIZE, Rank, Suit};
use rstest::rstest;

#[test]
fn suit_codes_round_trip() {
    assert_eq!(Suit::Clubs.code(), 1);
    assert_eq!(Suit::Hearts.code(), 2);
    assert_eq!(Suit::Spades.code(), 3);
    assert_eq!(Suit::Diamonds.code(), 4);

    for suit in Suit::ALL {
        assert_eq!(Suit::try_from(suit.code()), Ok(suit));
    }
}

#[rstest]
#[case(0)]
#[case(5)]
#[case(255)]
fn invalid_suit_code_is_rejected(#[case] code: u8) {
    assert_eq!(Suit::try_from(code), Err(CardError::InvalidSuit(code)));
}

#[test]
fn rank_values_cover_one_through_thirteen() {
    let values: Vec<u8> = Rank::ALL.iter().map(|rank| rank.value()).collect();
    assert_eq!(values, (1..=13).collect::<Vec<_>>());

    for value in 1..=13 {
        assert_eq!(Rank::try_from(value).map(Rank::value), Ok(value));
    }
    assert_eq!(Rank::try_from(0), Err(CardError::InvalidRank(0)));
    assert_eq!(Rank::try_from(14), Err(CardError::InvalidRank(14)));
}

#[rstest]
#[case(Rank::Ace, "A", "Ace")]
#[case(Rank::Two, "2", "2")]
#[case(Rank::Ten, "10", "10")]
#[case(Rank::Jack, "J", "Jack")]
#[case(Rank::Queen, "Q", "Queen")]
#[case(Rank::King, "K", "King")]
fn rank_labels(#[case] rank: Rank, #[case] symbol: &str, #[case] name: &str) {
    assert_eq!(rank.symbol(), symbol);
    assert_eq!(rank.name(), name);
}

#[test]
fn face_cards_and_red_suits() {
    let faces: Vec<Rank> = Rank::ALL.into_iter().filter(|rank| rank.is_face()).collect();
    assert_eq!(faces, vec![Rank::Jack, Rank::Queen, Rank::King]);

    assert!(Suit::Hearts.is_red());
    assert!(Suit::Diamonds.is_red());
    assert!(!Suit::Clubs.is_red());
    assert!(!Suit::Spades.is_red());
}

#[test]
fn suit_glyphs_are_distinct() {
    let glyphs: HashSet<char> = Suit::ALL.iter().map(|suit| suit.glyph()).collect();
    assert_eq!(glyphs.len(), 4);
    assert_eq!(Suit::Hearts.glyph(), '\u{2665}');
}

#[test]
fn index_mapping_is_bijective() {
    let cards: Vec<Card> = Card::all().collect();
    assert_eq!(cards.len(), DECK_SIZE);

    for (index, card) in cards.iter().enumerate() {
        assert_eq!(card.index(), index);
        assert_eq!(Card::from_index(index), Ok(*card));
    }

    let unique: HashSet<Card> = cards.into_iter().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn index_out_of_range_is_rejected() {
    assert_eq!(
        Card::from_index(DECK_SIZE),
        Err(CardError::InvalidIndex(DECK_SIZE))
    );
}

#[test]
fn card_display_is_human_readable() {
    assert_eq!(Card::new(Suit::Clubs, Rank::Ace).to_string(), "Ace of Clubs");
    assert_eq!(Card::new(Suit::Hearts, Rank::Ten).to_string(), "10 of Hearts");
    assert_eq!(
        Card::new(Suit::Diamonds, Rank::Queen).to_string(),
        "Queen of Diamonds"
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        CardError::InvalidRank(14).to_string(),
        "invalid rank value 14, expected 1..=13"
    );
    assert_eq!(
        CardError::InvalidIndex(60).to_string(),
        "invalid card index 60, expected 0..52"
    );
}
