use crate::cards::{parse_cards, Card};
use crate::HAND_SIZE;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RowError {
    #[error("row already holds 5 cards")]
    RowFull,
    #[error("row {row} holds {len} cards but the shortest row holds {min}")]
    InvalidPlacement { row: usize, len: usize, min: usize },
    #[error("no row {row}: there are {rows} rows")]
    NoSuchRow { row: usize, rows: usize },
    #[error("too many cards for one row: {0}")]
    TooManyCards(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// One slot of up to five cards, filled by appending one card per turn.
///
/// ```
/// use poker_rows::cards::{Card, Rank, Suit};
/// use poker_rows::row::Row;
///
/// let mut row = Row::new();
/// row.push(Card::new(Rank::Ace, Suit::Spades)).unwrap();
/// assert_eq!(row.len(), 1);
/// assert!(!row.is_full());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Row {
    cards: Vec<Card>,
}

impl Row {
    pub fn new() -> Self {
        Self { cards: Vec::with_capacity(HAND_SIZE) }
    }

    pub fn try_from_cards(cards: Vec<Card>) -> Result<Self, RowError> {
        if cards.len() > HAND_SIZE {
            return Err(RowError::TooManyCards(cards.len()));
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cards.len() == HAND_SIZE
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Append a card. A full row is never modified.
    pub fn push(&mut self, card: Card) -> Result<(), RowError> {
        if self.is_full() {
            return Err(RowError::RowFull);
        }
        self.cards.push(card);
        Ok(())
    }
}

impl AsRef<[Card]> for Row {
    fn as_ref(&self) -> &[Card] {
        &self.cards
    }
}

impl FromStr for Row {
    type Err = RowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| RowError::CardParse(e.to_string()))?;
        Row::try_from_cards(cards)
    }
}

/// All rows belonging to one side, with the monotonic fill rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rows {
    rows: Vec<Row>,
}

impl Rows {
    /// `count` empty rows.
    pub fn empty(count: usize) -> Self {
        Self { rows: vec![Row::new(); count] }
    }

    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn as_slice(&self) -> &[Row] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// Card count of the shortest row, 0 when there are no rows.
    pub fn min_len(&self) -> usize {
        self.rows.iter().map(Row::len).min().unwrap_or(0)
    }

    /// Whether every row holds five cards.
    pub fn is_full(&self) -> bool {
        !self.rows.is_empty() && self.rows.iter().all(Row::is_full)
    }

    /// Total cards placed across all rows.
    pub fn card_count(&self) -> usize {
        self.rows.iter().map(Row::len).sum()
    }

    fn check(&self, index: usize) -> Result<(), RowError> {
        let row = self
            .rows
            .get(index)
            .ok_or(RowError::NoSuchRow { row: index, rows: self.rows.len() })?;
        if row.is_full() {
            return Err(RowError::RowFull);
        }
        let min = self.min_len();
        if row.len() != min {
            return Err(RowError::InvalidPlacement { row: index, len: row.len(), min });
        }
        Ok(())
    }

    /// A row accepts a card only while it is among the shortest rows and not full.
    pub fn accepts(&self, index: usize) -> bool {
        self.check(index).is_ok()
    }

    /// Indices of every row that currently accepts a card.
    pub fn valid_rows(&self) -> Vec<usize> {
        (0..self.rows.len()).filter(|&i| self.accepts(i)).collect()
    }

    /// Place `card` into row `index`, enforcing the fill rule.
    pub fn place(&mut self, index: usize, card: Card) -> Result<(), RowError> {
        self.check(index)?;
        self.rows[index].push(card)
    }
}

impl<'a> IntoIterator for &'a Rows {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Clubs)
    }

    #[test]
    fn row_rejects_sixth_card() {
        let mut row: Row = "2c 3c 4c 5c 6c".parse().unwrap();
        assert!(row.is_full());
        assert!(matches!(row.push(card(Rank::Ace)), Err(RowError::RowFull)));
        assert_eq!(row.len(), 5);
    }

    #[test]
    fn row_parsing_rejects_too_many_cards() {
        assert_eq!("2c 3c 4c 5c 6c 7c".parse::<Row>(), Err(RowError::TooManyCards(6)));
        assert!(matches!("2c zz".parse::<Row>(), Err(RowError::CardParse(_))));
    }

    #[test]
    fn only_shortest_rows_accept_cards() {
        let mut rows = Rows::empty(3);
        assert_eq!(rows.valid_rows(), vec![0, 1, 2]);

        rows.place(1, card(Rank::Two)).unwrap();
        assert_eq!(rows.valid_rows(), vec![0, 2]);
        assert_eq!(
            rows.place(1, card(Rank::Three)),
            Err(RowError::InvalidPlacement { row: 1, len: 1, min: 0 })
        );

        rows.place(0, card(Rank::Four)).unwrap();
        rows.place(2, card(Rank::Five)).unwrap();
        assert_eq!(rows.min_len(), 1);
        assert_eq!(rows.valid_rows(), vec![0, 1, 2]);
    }

    #[test]
    fn unknown_row_is_reported() {
        let mut rows = Rows::empty(2);
        assert_eq!(rows.place(5, card(Rank::Ace)), Err(RowError::NoSuchRow { row: 5, rows: 2 }));
    }

    #[test]
    fn full_rows_accept_nothing() {
        let full: Row = "2c 3c 4c 5c 6c".parse().unwrap();
        let mut rows = Rows::from_rows(vec![full.clone(), full]);
        assert!(rows.is_full());
        assert!(rows.valid_rows().is_empty());
        assert_eq!(rows.place(0, card(Rank::Ace)), Err(RowError::RowFull));
        assert_eq!(rows.card_count(), 10);
    }

    #[test]
    fn no_rows_is_never_full() {
        assert!(!Rows::empty(0).is_full());
        assert_eq!(Rows::empty(0).min_len(), 0);
    }
}
