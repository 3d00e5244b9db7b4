use std::fmt;
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high). The discriminant is the scoring value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    /// Every rank, lowest first.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Scoring value in `2..=14`.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Rank::value`].
    pub const fn from_value(v: u8) -> Option<Rank> {
        if v < 2 || v > 14 {
            return None;
        }
        Some(Rank::ALL[(v - 2) as usize])
    }

    /// Short face label as printed on a card: "2".."10", "J", "Q", "K", "A".
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_ascii_uppercase();
        let r = match t.as_str() {
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            digit => digit
                .parse::<u8>()
                .ok()
                .filter(|v| (2..=9).contains(v))
                .and_then(Rank::from_value)
                .ok_or_else(|| RankParseError::Invalid(s.to_string()))?,
        };
        Ok(r)
    }
}

/// Four suits, in the game's fixed display order. Suits never affect hand strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// 1-based position in the display order (Hearts = 1 .. Spades = 4).
    pub const fn display_order(self) -> u8 {
        match self {
            Suit::Hearts => 1,
            Suit::Diamonds => 2,
            Suit::Clubs => 3,
            Suit::Spades => 4,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(t))
            .ok_or_else(|| SuitParseError::Invalid(s.to_string()))
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'h' | '♥' => Ok(Suit::Hearts),
            'd' | '♦' => Ok(Suit::Diamonds),
            'c' | '♣' => Ok(Suit::Clubs),
            's' | '♠' => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// A playing card. Cards carry no identity beyond their value.
///
/// ```
/// use poker_rows::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ten, Suit::Hearts);
/// assert_eq!(card.to_string(), "10h");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        // Suit is always the last char; everything before it is the rank.
        let mut chars = t.chars();
        let suit_ch = chars.next_back().ok_or_else(|| CardParseError::Invalid(s.to_string()))?;
        let rank_str = chars.as_str();
        if rank_str.is_empty() {
            return Err(CardParseError::Invalid(s.to_string()));
        }
        let rank = Rank::from_str(rank_str)?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse cards separated by whitespace or commas.
///
/// ```
/// use poker_rows::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("Ah, Kh 10h").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Hearts));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Hearts));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}
