use crate::cards::{Card, Suit};
use crate::HAND_SIZE;

/// Whether all cards share one suit (a flush).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub is_flush: bool,
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    /// A flush needs exactly five cards of the same suit.
    pub fn detect(cards: &[Card]) -> Self {
        let first = cards.first().map(|c| c.suit());
        let all_same = cards.iter().all(|c| Some(c.suit()) == first);

        if all_same && cards.len() == HAND_SIZE {
            SuitInfo { is_flush: true, flush_suit: first }
        } else {
            SuitInfo { is_flush: false, flush_suit: None }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    #[test]
    fn five_hearts_is_a_flush() {
        let cards = [
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Eight, Suit::Hearts),
            Card::new(Rank::Five, Suit::Hearts),
            Card::new(Rank::Two, Suit::Hearts),
        ];
        let info = SuitInfo::detect(&cards);
        assert!(info.is_flush);
        assert_eq!(info.flush_suit, Some(Suit::Hearts));
    }

    #[test]
    fn mixed_suits_is_not_a_flush() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Queen, Suit::Spades),
            Card::new(Rank::Jack, Suit::Spades),
            Card::new(Rank::Nine, Suit::Spades),
        ];
        assert!(!SuitInfo::detect(&cards).is_flush);
    }

    #[test]
    fn short_suited_row_is_not_a_flush() {
        let cards = [
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Three, Suit::Clubs),
            Card::new(Rank::Nine, Suit::Clubs),
        ];
        let info = SuitInfo::detect(&cards);
        assert!(!info.is_flush);
        assert_eq!(info.flush_suit, None);
        assert!(!SuitInfo::detect(&[]).is_flush);
    }
}
