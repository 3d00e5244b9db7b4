use crate::cards::Rank;

/// Rank multiplicities of a hand: how many cards of each rank it holds.
///
/// Example: KKK44 has K -> 3, 4 -> 2 and multiplicities `[3, 2]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    counts: [u8; 15],
}

impl RankGroups {
    /// Count the ranks of a hand of any size.
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        let mut counts = [0u8; 15];
        for rank in ranks {
            counts[rank.value() as usize] += 1;
        }
        Self { counts }
    }

    /// Number of cards of `rank` in the hand.
    pub fn count(&self, rank: Rank) -> u8 {
        self.counts[rank.value() as usize]
    }

    /// Non-zero multiplicities sorted descending, e.g. `[3, 2]` for a full house.
    pub fn multiplicities(&self) -> Vec<u8> {
        let mut out: Vec<u8> = self.counts.iter().copied().filter(|&c| c > 0).collect();
        out.sort_unstable_by(|a, b| b.cmp(a));
        out
    }

    /// Largest multiplicity, 0 for an empty hand.
    pub fn max_multiplicity(&self) -> u8 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Whether some rank appears exactly `n` times.
    pub fn has_multiplicity(&self, n: u8) -> bool {
        self.counts.iter().any(|&c| c == n)
    }

    /// Number of ranks that appear exactly twice.
    pub fn pair_count(&self) -> usize {
        self.counts.iter().filter(|&&c| c == 2).count()
    }
}
