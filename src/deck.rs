//! The shuffled draw pile.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DeckError;

/// A shuffled 52-card draw pile.
///
/// Cards leave the pile exactly once when dealt and are never returned; a
/// fresh deck is built per session or room reset.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards; the top of the pile is the end of the vector.
    cards: Vec<Card>,
}

impl Deck {
    /// Builds all 52 suit-rank combinations and shuffles them uniformly.
    #[must_use]
    pub fn shuffled(rng: &mut ChaCha8Rng) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }
        cards.shuffle(rng);
        Self { cards }
    }

    /// Builds a pile from explicit cards; the last card is drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] when the pile is empty.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Exhausted)
    }

    /// Number of cards left in the pile.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn a_fresh_deck_holds_every_combination_once() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut deck = Deck::shuffled(&mut rng);
        assert_eq!(deck.remaining(), DECK_SIZE);

        let mut seen = std::collections::HashSet::new();
        while let Ok(card) = deck.draw() {
            assert!(seen.insert((card.suit, card.rank)), "duplicate card dealt");
        }
        assert_eq!(seen.len(), DECK_SIZE);
    }

    #[test]
    fn drawing_past_the_end_is_an_explicit_error() {
        let mut deck = Deck::from_cards(vec![Card::new(Suit::Spades, 2)]);
        assert!(deck.draw().is_ok());
        assert_eq!(deck.draw().unwrap_err(), DeckError::Exhausted);
    }
}
