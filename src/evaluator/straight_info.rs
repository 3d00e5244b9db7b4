use crate::cards::Rank;
use crate::HAND_SIZE;

/// Whether a hand's ranks form a straight, and its top rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Detect a straight from ranks sorted descending.
    ///
    /// Only exactly five ranks forming `[top, top-1, top-2, top-3, top-4]`
    /// qualify. The Ace always counts high, so A-5-4-3-2 is not a straight.
    pub fn detect(ranks_desc: &[Rank]) -> Self {
        if is_descending_run(ranks_desc) {
            StraightInfo { is_straight: true, top_rank: ranks_desc.first().copied() }
        } else {
            StraightInfo { is_straight: false, top_rank: None }
        }
    }
}

/// Five ranks, each exactly one below the previous.
pub(crate) fn is_descending_run(ranks_desc: &[Rank]) -> bool {
    ranks_desc.len() == HAND_SIZE
        && ranks_desc.windows(2).all(|w| w[0].value() == w[1].value() + 1)
}
