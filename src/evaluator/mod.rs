pub(crate) mod hand_analysis;
pub(crate) mod kicker;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use crate::HAND_SIZE;
use core::fmt;
use hand_analysis::HandAnalysis;

pub use kicker::select_display_card;
pub use rank_groups::RankGroups;

/// Poker hand category. The discriminant is the category tier, 1 (weakest) to 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    /// Categories in the order they are tested: strongest first.
    pub const BY_PRIORITY: [Category; 10] = [
        Category::RoyalFlush,
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::Pair,
        Category::HighCard,
    ];

    pub const fn tier(self) -> u8 {
        self as u8
    }

    pub fn from_tier(tier: u8) -> Option<Category> {
        Category::BY_PRIORITY.into_iter().find(|c| c.tier() == tier)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }

    /// Whether the analysed hand satisfies this category's own condition.
    /// Several may hold at once; [`evaluate`] takes the first in priority order.
    fn holds(self, hand: &HandAnalysis) -> bool {
        let flush = hand.suit_info.is_flush;
        let straight = hand.straight_info.is_straight;
        let groups = &hand.rank_groups;
        match self {
            Category::RoyalFlush => flush && straight && hand.top_rank() == Some(Rank::Ace),
            Category::StraightFlush => flush && straight,
            Category::FourOfAKind => groups.max_multiplicity() == 4,
            Category::FullHouse => groups.multiplicities() == [3, 2],
            Category::Flush => flush,
            Category::Straight => straight,
            Category::ThreeOfAKind => groups.has_multiplicity(3),
            Category::TwoPair => groups.pair_count() == 2,
            Category::Pair => groups.has_multiplicity(2),
            Category::HighCard => true,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Evaluated strength of one row.
///
/// Ordering compares the category tier first and then the ranks, both
/// descending, element by element. Any higher tier beats any lower tier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub struct HandRank {
    category: Category,
    ranks: Vec<Rank>,
}

impl HandRank {
    pub fn category(&self) -> Category {
        self.category
    }

    pub fn tier(&self) -> u8 {
        self.category.tier()
    }

    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    /// All ranks of the hand, highest first.
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    /// The card shown next to the label in progress displays.
    pub fn display_card(&self) -> Option<Rank> {
        select_display_card(&self.ranks, &RankGroups::from_ranks(&self.ranks), self.category)
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.display_card() {
            Some(card) => write!(f, "{} {}", self.label(), card),
            None => f.write_str(self.label()),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("incomplete hand: expected 5 cards, got {len}")]
    IncompleteHand { len: usize },
    #[error("too many cards: expected 5 cards, got {len}")]
    TooManyCards { len: usize },
}

/// Classify a hand of up to five cards.
///
/// Partial hands are accepted for live previews: flushes and straights need
/// exactly five cards, so short hands fall through to the pair and high card
/// checks. An empty hand is High Card with no ranks.
///
/// ```
/// use poker_rows::cards::parse_cards;
/// use poker_rows::evaluator::{evaluate, Category};
///
/// let hand = parse_cards("Ah Kh Qh Jh 10h").unwrap();
/// let rank = evaluate(&hand);
/// assert_eq!(rank.category(), Category::RoyalFlush);
/// assert_eq!(rank.tier(), 10);
/// ```
pub fn evaluate(cards: &[Card]) -> HandRank {
    let analysis = HandAnalysis::new(cards);
    let category = Category::BY_PRIORITY
        .into_iter()
        .find(|c| c.holds(&analysis))
        .unwrap_or(Category::HighCard);
    HandRank { category, ranks: analysis.ranks_desc }
}

/// Classify a finished row for final judgment; anything but five cards is rejected.
pub fn evaluate_complete(cards: &[Card]) -> Result<HandRank, EvalError> {
    match cards.len() {
        HAND_SIZE => Ok(evaluate(cards)),
        len if len < HAND_SIZE => Err(EvalError::IncompleteHand { len }),
        len => Err(EvalError::TooManyCards { len }),
    }
}
