//! Agents: pluggable row pickers for either side of a match.
//!
//! An agent only decides *where* a drawn card goes. The match enforces the
//! fill rule, so an agent that picks an invalid row gets a placement error.

use crate::cards::Card;
use crate::row::Rows;

/// Chooses the row a drawn card is placed into.
pub trait PlacementAgent {
    /// Pick a row index from `rows` for `card`, or `None` if no row accepts it.
    fn choose_row(&mut self, rows: &Rows, card: Card) -> Option<usize>;
}

mod random;

pub use random::RandomAgent;

/// Always takes the first row that accepts a card.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstValidAgent;

impl PlacementAgent for FirstValidAgent {
    fn choose_row(&mut self, rows: &Rows, _card: Card) -> Option<usize> {
        rows.valid_rows().first().copied()
    }
}

impl<A: PlacementAgent + ?Sized> PlacementAgent for Box<A> {
    fn choose_row(&mut self, rows: &Rows, card: Card) -> Option<usize> {
        (**self).choose_row(rows, card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn first_valid_skips_longer_rows() {
        let mut rows = Rows::empty(3);
        let c = Card::new(Rank::Ace, Suit::Hearts);
        rows.place(0, c).unwrap();
        assert_eq!(FirstValidAgent.choose_row(&rows, c), Some(1));
    }

    #[test]
    fn boxed_agents_delegate() {
        let mut agent: Box<dyn PlacementAgent> = Box::new(FirstValidAgent);
        let rows = Rows::empty(2);
        assert_eq!(agent.choose_row(&rows, Card::new(Rank::Two, Suit::Clubs)), Some(0));
    }

    #[test]
    fn no_rows_means_no_choice() {
        let rows = Rows::empty(0);
        assert_eq!(FirstValidAgent.choose_row(&rows, Card::new(Rank::Two, Suit::Clubs)), None);
    }
}
