use crate::agents::PlacementAgent;
use crate::cards::Card;
use crate::config::{ConfigError, MatchConfig};
use crate::deck::Deck;
use crate::judge::{self, MatchResult, RowPreview, Side};
use crate::row::{RowError, Rows};
use log::{info, trace};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("match is over")]
    MatchOver,
    #[error("a card has already been drawn this turn")]
    CardAlreadyDrawn,
    #[error("draw a card before placing")]
    NoCardDrawn,
    #[error("deck is empty")]
    DeckEmpty,
    #[error("agent found no row for {0}")]
    NoMove(Card),
    #[error("invalid placement: {0}")]
    Placement(#[from] RowError),
}

/// One match between the player and the opponent.
///
/// Sides alternate, player first. On its turn a side draws one card and
/// places it into one of its rows, respecting the fill rule.
///
/// ```
/// use poker_rows::config::MatchConfig;
/// use poker_rows::game::Match;
/// use poker_rows::judge::Side;
///
/// let mut m = Match::new(MatchConfig::default().with_seed(1)).unwrap();
/// assert_eq!(m.turn(), Side::Player);
/// m.draw().unwrap();
/// m.place(0).unwrap();
/// assert_eq!(m.turn(), Side::Opponent);
/// ```
#[derive(Debug, Clone)]
pub struct Match {
    deck: Deck,
    player: Rows,
    opponent: Rows,
    turn: Side,
    drawn: Option<Card>,
}

impl Match {
    /// Shuffle a fresh deck and deal the opening card into every row.
    pub fn new(config: MatchConfig) -> Result<Self, GameError> {
        let deck = match config.seed {
            Some(seed) => Deck::shuffled(seed),
            None => {
                let mut deck = Deck::standard();
                deck.shuffle_with(&mut rand::rng());
                deck
            }
        };
        Self::with_deck(config, deck)
    }

    /// Start a match dealing from `deck` as given; the last card is dealt first.
    pub fn with_deck(config: MatchConfig, mut deck: Deck) -> Result<Self, GameError> {
        config.validate()?;
        let mut player = Rows::empty(config.rows);
        let mut opponent = Rows::empty(config.rows);
        for rows in [&mut player, &mut opponent] {
            for i in 0..config.rows {
                let card = deck.deal().ok_or(GameError::DeckEmpty)?;
                rows.place(i, card)?;
            }
        }
        trace!("opening deal done, {} cards left", deck.len());
        Ok(Self { deck, player, opponent, turn: Side::Player, drawn: None })
    }

    /// The side to move.
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn rows(&self, side: Side) -> &Rows {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    /// Card drawn this turn and not yet placed.
    pub fn drawn_card(&self) -> Option<Card> {
        self.drawn
    }

    pub fn cards_left(&self) -> usize {
        self.deck.len()
    }

    /// Draw the turn's card.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        if self.is_decided() {
            return Err(GameError::MatchOver);
        }
        if self.drawn.is_some() {
            return Err(GameError::CardAlreadyDrawn);
        }
        let card = self.deck.deal().ok_or(GameError::DeckEmpty)?;
        self.drawn = Some(card);
        Ok(card)
    }

    /// Place the drawn card into `row` of the side to move and pass the turn.
    /// On an invalid row the card stays in hand and the turn does not change.
    pub fn place(&mut self, row: usize) -> Result<(), GameError> {
        let card = self.drawn.ok_or(GameError::NoCardDrawn)?;
        let side = self.turn;
        match side {
            Side::Player => self.player.place(row, card)?,
            Side::Opponent => self.opponent.place(row, card)?,
        }
        trace!("{side} placed {card} in row {row}");
        self.drawn = None;
        self.turn = side.other();

        if self.is_decided() {
            if let Some(result) = self.result() {
                info!(
                    "match decided: {} ({}-{}, {} drawn)",
                    result.winner(),
                    result.wins(Side::Player),
                    result.wins(Side::Opponent),
                    result.draws()
                );
            }
        }
        Ok(())
    }

    /// Draw and let `agent` place for the side to move. Returns the chosen row.
    pub fn play_turn<A: PlacementAgent + ?Sized>(&mut self, agent: &mut A) -> Result<usize, GameError> {
        let card = match self.drawn {
            Some(card) => card,
            None => self.draw()?,
        };
        let row = agent.choose_row(self.rows(self.turn), card).ok_or(GameError::NoMove(card))?;
        self.place(row)?;
        Ok(row)
    }

    /// Play until decided, `player` and `opponent` choosing rows for their side.
    pub fn play_out<P, O>(&mut self, player: &mut P, opponent: &mut O) -> Result<MatchResult, GameError>
    where
        P: PlacementAgent + ?Sized,
        O: PlacementAgent + ?Sized,
    {
        while !self.is_decided() {
            match self.turn {
                Side::Player => self.play_turn(player)?,
                Side::Opponent => self.play_turn(opponent)?,
            };
        }
        self.result().ok_or(GameError::MatchOver)
    }

    pub fn is_decided(&self) -> bool {
        judge::is_decided(self.player.as_slice(), self.opponent.as_slice())
    }

    /// The verdict, once every row is full.
    pub fn result(&self) -> Option<MatchResult> {
        if !self.is_decided() {
            return None;
        }
        judge::judge(self.player.as_slice(), self.opponent.as_slice()).ok()
    }

    pub fn preview(&self) -> Vec<RowPreview> {
        judge::preview(self.player.as_slice(), self.opponent.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::RandomAgent;
    use crate::deck::DECK_SIZE;

    fn seeded(rows: usize) -> Match {
        Match::new(MatchConfig::new(rows).with_seed(11)).unwrap()
    }

    #[test]
    fn opening_deal_puts_one_card_in_every_row() {
        let m = seeded(5);
        assert!(m.rows(Side::Player).iter().all(|r| r.len() == 1));
        assert!(m.rows(Side::Opponent).iter().all(|r| r.len() == 1));
        assert_eq!(m.cards_left(), DECK_SIZE - 10);
        assert_eq!(m.turn(), Side::Player);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = Match::new(MatchConfig::new(6)).unwrap_err();
        assert!(matches!(err, GameError::Config(ConfigError::TooManyRows { .. })));
    }

    #[test]
    fn draw_then_place_alternates_turns() {
        let mut m = seeded(2);
        assert_eq!(m.place(0), Err(GameError::NoCardDrawn));
        let card = m.draw().unwrap();
        assert_eq!(m.draw(), Err(GameError::CardAlreadyDrawn));
        m.place(1).unwrap();
        assert_eq!(m.rows(Side::Player).get(1).unwrap().as_slice()[1], card);
        assert_eq!(m.turn(), Side::Opponent);
        assert_eq!(m.drawn_card(), None);
    }

    #[test]
    fn rejected_placement_keeps_the_card_and_the_turn() {
        let mut m = seeded(2);
        m.draw().unwrap();
        m.place(0).unwrap();
        m.draw().unwrap();
        m.place(0).unwrap();

        // player row 0 now has 2 cards, row 1 has 1
        let card = m.draw().unwrap();
        assert!(matches!(m.place(0), Err(GameError::Placement(RowError::InvalidPlacement { .. }))));
        assert_eq!(m.drawn_card(), Some(card));
        assert_eq!(m.turn(), Side::Player);
        m.place(1).unwrap();
    }

    #[test]
    fn full_match_ends_decided() {
        let mut m = seeded(5);
        let mut a = RandomAgent::seeded(1);
        let mut b = RandomAgent::seeded(2);
        let result = m.play_out(&mut a, &mut b).unwrap();
        assert!(m.is_decided());
        assert_eq!(m.cards_left(), 2);
        assert_eq!(result.row_outcomes().len(), 5);
        assert_eq!(m.draw(), Err(GameError::MatchOver));
        assert_eq!(m.result(), Some(result));
    }

    #[test]
    fn short_deck_fails_the_opening_deal() {
        let mut deck = Deck::standard();
        while deck.len() > 3 {
            deck.deal();
        }
        let err = Match::with_deck(MatchConfig::new(2), deck).unwrap_err();
        assert_eq!(err, GameError::DeckEmpty);
    }
}
