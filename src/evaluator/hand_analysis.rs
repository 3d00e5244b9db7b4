use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};

/// Pre-computed properties of a hand of 0..=5 cards.
/// Built once and consulted by every category check.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub ranks_desc: Vec<Rank>,
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card]) -> Self {
        let mut ranks_desc: Vec<Rank> = cards.iter().map(|c| c.rank()).collect();
        ranks_desc.sort_unstable_by(|a, b| b.cmp(a));

        let rank_groups = RankGroups::from_ranks(&ranks_desc);
        let suit_info = SuitInfo::detect(cards);
        let straight_info = StraightInfo::detect(&ranks_desc);

        Self { ranks_desc, rank_groups, suit_info, straight_info }
    }

    pub fn top_rank(&self) -> Option<Rank> {
        self.ranks_desc.first().copied()
    }
}
