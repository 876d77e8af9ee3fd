//! Card types and the canonical 52-card index mapping.

use core::fmt;

use crate::error::CardError;

/// Number of suits in a standard deck.
pub const SUIT_COUNT: usize = 4;

/// Number of ranks per suit.
pub const RANK_COUNT: usize = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = SUIT_COUNT * RANK_COUNT;

/// Card suit.
///
/// The declaration order matches the numeric codes used by [`Suit::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All suits, in canonical order.
    pub const ALL: [Self; SUIT_COUNT] = [Self::Clubs, Self::Hearts, Self::Spades, Self::Diamonds];

    /// Returns the numeric suit code (1 = Clubs, 2 = Hearts, 3 = Spades, 4 = Diamonds).
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8 + 1
    }

    const fn position(self) -> usize {
        self as usize
    }

    /// Returns the unicode glyph used to display the suit.
    ///
    /// ```
    /// use bjdeck::Suit;
    ///
    /// assert_eq!(Suit::Spades.glyph(), '\u{2660}');
    /// ```
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Clubs => '\u{2663}',
            Self::Hearts => '\u{2665}',
            Self::Spades => '\u{2660}',
            Self::Diamonds => '\u{2666}',
        }
    }

    /// Returns the English name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
            Self::Diamonds => "Diamonds",
        }
    }

    /// Returns whether the suit is conventionally printed in red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Clubs),
            2 => Ok(Self::Hearts),
            3 => Ok(Self::Spades),
            4 => Ok(Self::Diamonds),
            _ => Err(CardError::InvalidSuit(code)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank.
///
/// Each rank carries an integer value from 1 (Ace) to 13 (King).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    /// Ace (1).
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack (11).
    Jack,
    /// Queen (12).
    Queen,
    /// King (13).
    King,
}

impl Rank {
    /// All ranks, from Ace to King.
    pub const ALL: [Self; RANK_COUNT] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the rank value (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the short symbol: `"A"`, `"2"`..`"10"`, `"J"`, `"Q"` or `"K"`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            pip => pip.name(),
        }
    }

    /// Returns the display name: `"Ace"`, `"2"`..`"10"`, `"Jack"`, `"Queen"` or `"King"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }

    /// Returns whether this is a Jack, Queen or King.
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Self::Jack | Self::Queen | Self::King)
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=13 => Ok(Self::ALL[value as usize - 1]),
            _ => Err(CardError::InvalidRank(value)),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns the canonical index of the card in `0..DECK_SIZE`.
    ///
    /// Cards are grouped by suit in [`Suit::ALL`] order, then by rank value.
    ///
    /// ```
    /// use bjdeck::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::new(Suit::Clubs, Rank::Ace).index(), 0);
    /// assert_eq!(Card::new(Suit::Diamonds, Rank::King).index(), 51);
    /// ```
    #[must_use]
    pub const fn index(self) -> usize {
        self.suit.position() * RANK_COUNT + self.rank.value() as usize - 1
    }

    /// Returns the card at the given canonical index.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidIndex`] if `index >= DECK_SIZE`.
    pub const fn from_index(index: usize) -> Result<Self, CardError> {
        if index >= DECK_SIZE {
            return Err(CardError::InvalidIndex(index));
        }
        Ok(Self::at(index))
    }

    /// Card at a canonical index already known to be below `DECK_SIZE`.
    pub(crate) const fn at(index: usize) -> Self {
        Self::new(Suit::ALL[index / RANK_COUNT], Rank::ALL[index % RANK_COUNT])
    }

    /// Iterates over all 52 cards in canonical index order.
    pub fn all() -> impl Iterator<Item = Self> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Self::new(suit, rank)))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}
