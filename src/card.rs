//! Card types and deck constants.

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All four suits, in deck-building order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Diamonds, Self::Hearts, Self::Clubs];

    /// The glyph used when rendering a card of this suit.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Clubs => '♣',
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but count as zero points.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Point value of the card: Ace counts 11, face cards count 10, numeric
    /// ranks count their face value.
    ///
    /// An Ace is always worth 11 at this table; a hand never re-values one
    /// downward to dodge a bust.
    #[must_use]
    pub const fn points(self) -> u8 {
        match self.rank {
            1 => 11,
            2..=10 => self.rank,
            11..=13 => 10,
            _ => 0,
        }
    }

    /// Short rank label for rendering ("A", "2"–"10", "J", "Q", "K").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
