use super::PlacementAgent;
use crate::cards::Card;
use crate::row::Rows;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{RngCore, SeedableRng};

/// Places each card into a uniformly random valid row.
#[derive(Debug)]
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    /// Deterministic agent for reproducible matches.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        let mut seed = [0u8; 32];
        rand::rng().fill_bytes(&mut seed);
        Self { rng: StdRng::from_seed(seed) }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl PlacementAgent for RandomAgent {
    fn choose_row(&mut self, rows: &Rows, _card: Card) -> Option<usize> {
        rows.valid_rows().choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn only_valid_rows_are_chosen() {
        let mut rows = Rows::empty(4);
        let c = Card::new(Rank::Nine, Suit::Spades);
        rows.place(1, c).unwrap();
        rows.place(3, c).unwrap();
        let mut agent = RandomAgent::seeded(5);
        for _ in 0..50 {
            let row = agent.choose_row(&rows, c).unwrap();
            assert!(row == 0 || row == 2, "picked {row}");
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let rows = Rows::empty(5);
        let c = Card::new(Rank::Two, Suit::Hearts);
        let mut a = RandomAgent::seeded(9);
        let mut b = RandomAgent::seeded(9);
        let xs: Vec<_> = (0..20).map(|_| a.choose_row(&rows, c)).collect();
        let ys: Vec<_> = (0..20).map(|_| b.choose_row(&rows, c)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn full_rows_yield_none() {
        let full: crate::row::Row = "2c 3c 4c 5c 6c".parse().unwrap();
        let rows = Rows::from_rows(vec![full]);
        assert_eq!(RandomAgent::seeded(1).choose_row(&rows, Card::new(Rank::Ace, Suit::Clubs)), None);
    }
}
