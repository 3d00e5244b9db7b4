use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of cards in a fresh deck.
pub const DECK_SIZE: usize = 52;

/// A standard 52-card deck. Every card appears exactly once per deck instance.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Unshuffled deck, suit by suit in display order.
    ///
    /// ```
    /// use poker_rows::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    /// A standard deck shuffled with a seeded RNG, for reproducible matches.
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        deck.shuffle_with(&mut rng);
        deck
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Deal the top card, `None` once the deck is exhausted.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}
