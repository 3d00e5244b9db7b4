use super::rank_groups::RankGroups;
use super::Category;
use crate::cards::Rank;

/// Pick the single most relevant card of a hand for display.
///
/// Candidates are ordered by (is Ace, multiplicity, rank), all descending. For
/// High Card, Pair, Two Pair and Flush the highest rank held more than once
/// wins if there is one; every other category shows its highest rank.
///
/// This is a coarse presentation signal only. Hands are ranked against each
/// other by [`HandRank`](super::HandRank) ordering, never by this card.
pub fn select_display_card(ranks: &[Rank], groups: &RankGroups, category: Category) -> Option<Rank> {
    let mut candidates = ranks.to_vec();
    candidates.sort_by_key(|&r| std::cmp::Reverse((r == Rank::Ace, groups.count(r), r)));

    let highest = candidates.iter().copied().max();
    if prefers_repeated_rank(category) {
        candidates.iter().copied().find(|&r| groups.count(r) > 1).or(highest)
    } else {
        highest
    }
}

fn prefers_repeated_rank(category: Category) -> bool {
    matches!(category, Category::HighCard | Category::Pair | Category::TwoPair | Category::Flush)
}
