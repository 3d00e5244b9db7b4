//! Row-by-row match judging.
//!
//! Each row index is a separate contest between the player's row and the
//! opponent's row. Final verdicts use the full [`HandRank`] ordering and need
//! every row complete; previews accept rows of any length.

use crate::cards::Card;
use crate::evaluator::{evaluate, evaluate_complete, EvalError, HandRank};
use crate::HAND_SIZE;
use core::cmp::Ordering;
use core::fmt;
use log::debug;

/// The two participants of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub const fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => f.write_str("player"),
            Side::Opponent => f.write_str("opponent"),
        }
    }
}

/// Who takes a row, or the whole match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Player,
    Opponent,
    Draw,
}

impl Outcome {
    /// Outcome of comparing the player's hand against the opponent's.
    pub fn from_ordering(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Outcome::Player,
            Ordering::Less => Outcome::Opponent,
            Ordering::Equal => Outcome::Draw,
        }
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::Player => Some(Side::Player),
            Outcome::Opponent => Some(Side::Opponent),
            Outcome::Draw => None,
        }
    }

    /// Announcement shown when the match ends.
    pub const fn message(self) -> &'static str {
        match self {
            Outcome::Player => "Player wins!",
            Outcome::Opponent => "Opponent wins!",
            Outcome::Draw => "It's a draw!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Player => f.write_str("player"),
            Outcome::Opponent => f.write_str("opponent"),
            Outcome::Draw => f.write_str("draw"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum JudgeError {
    #[error("row count mismatch: player has {player}, opponent has {opponent}")]
    InvalidRowLength { player: usize, opponent: usize },
    #[error("{side} row {row} is incomplete: {len} of 5 cards")]
    IncompleteRow { side: Side, row: usize, len: usize },
}

/// Final verdict of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct MatchResult {
    winner: Outcome,
    rows: Vec<Outcome>,
}

impl MatchResult {
    /// Overall winner: the side that took strictly more rows, else a draw.
    pub fn winner(&self) -> Outcome {
        self.winner
    }

    /// Per-row outcomes, indexed by row.
    pub fn row_outcomes(&self) -> &[Outcome] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<Outcome> {
        self.rows.get(index).copied()
    }

    /// Number of rows taken by `side`.
    pub fn wins(&self, side: Side) -> usize {
        self.rows.iter().filter(|o| o.winner() == Some(side)).count()
    }

    pub fn draws(&self) -> usize {
        self.rows.iter().filter(|o| matches!(o, Outcome::Draw)).count()
    }

    fn from_rows(rows: Vec<Outcome>) -> Self {
        let player = rows.iter().filter(|o| matches!(o, Outcome::Player)).count();
        let opponent = rows.iter().filter(|o| matches!(o, Outcome::Opponent)).count();
        let winner = Outcome::from_ordering(player.cmp(&opponent));
        Self { winner, rows }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.winner.message())
    }
}

fn complete(cards: &[Card], side: Side, row: usize) -> Result<HandRank, JudgeError> {
    evaluate_complete(cards).map_err(|e| match e {
        EvalError::IncompleteHand { len } | EvalError::TooManyCards { len } => {
            JudgeError::IncompleteRow { side, row, len }
        }
    })
}

/// Judge a finished match.
///
/// Both sides must have the same number of rows and every row must hold
/// exactly five cards.
///
/// ```
/// use poker_rows::judge::{judge, Outcome};
/// use poker_rows::row::Row;
///
/// let player: Vec<Row> = vec!["Ah Kh Qh Jh 10h".parse().unwrap()];
/// let opponent: Vec<Row> = vec!["9c 9d 9h 9s 2c".parse().unwrap()];
/// let result = judge(&player, &opponent).unwrap();
/// assert_eq!(result.winner(), Outcome::Player);
/// ```
pub fn judge<R: AsRef<[Card]>>(
    player_rows: &[R],
    opponent_rows: &[R],
) -> Result<MatchResult, JudgeError> {
    if player_rows.len() != opponent_rows.len() {
        return Err(JudgeError::InvalidRowLength {
            player: player_rows.len(),
            opponent: opponent_rows.len(),
        });
    }

    let mut outcomes = Vec::with_capacity(player_rows.len());
    for (i, (p, o)) in player_rows.iter().zip(opponent_rows).enumerate() {
        let player = complete(p.as_ref(), Side::Player, i)?;
        let opponent = complete(o.as_ref(), Side::Opponent, i)?;
        let outcome = Outcome::from_ordering(player.cmp(&opponent));
        debug!("row {i}: {player} vs {opponent} -> {outcome}");
        outcomes.push(outcome);
    }

    Ok(MatchResult::from_rows(outcomes))
}

/// A match is decided once every row of both sides holds five cards.
pub fn is_decided<R: AsRef<[Card]>>(player_rows: &[R], opponent_rows: &[R]) -> bool {
    let full = |rows: &[R]| rows.iter().all(|r| r.as_ref().len() == HAND_SIZE);
    !player_rows.is_empty() && !opponent_rows.is_empty() && full(player_rows) && full(opponent_rows)
}

/// Who is currently ahead on one row. Rows may be partial or empty.
pub fn leading(player_row: &[Card], opponent_row: &[Card]) -> Outcome {
    Outcome::from_ordering(evaluate(player_row).cmp(&evaluate(opponent_row)))
}

/// Live standing of one row pair.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct RowPreview {
    pub index: usize,
    pub player: HandRank,
    pub opponent: HandRank,
    pub leader: Outcome,
}

impl RowPreview {
    /// Label and display card for one side, e.g. "Pair 7".
    pub fn text(&self, side: Side) -> String {
        match side {
            Side::Player => self.player.to_string(),
            Side::Opponent => self.opponent.to_string(),
        }
    }
}

/// Standing of every row pair, for progress displays.
///
/// Never fails: rows of any length are evaluated as they stand, and when the
/// sides have different row counts only the common prefix is reported.
pub fn preview<R: AsRef<[Card]>>(player_rows: &[R], opponent_rows: &[R]) -> Vec<RowPreview> {
    player_rows
        .iter()
        .zip(opponent_rows)
        .enumerate()
        .map(|(index, (p, o))| {
            let player = evaluate(p.as_ref());
            let opponent = evaluate(o.as_ref());
            let leader = Outcome::from_ordering(player.cmp(&opponent));
            RowPreview { index, player, opponent, leader }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn rows(hands: &[&str]) -> Vec<Vec<Card>> {
        hands.iter().map(|h| parse_cards(h).unwrap()).collect()
    }

    #[test]
    fn mismatched_row_counts_are_rejected() {
        let p = rows(&["Ah Kh Qh Jh 10h", "2c 3d 4h 5s 7c"]);
        let o = rows(&["9c 9d 9h 9s 2c"]);
        assert_eq!(judge(&p, &o), Err(JudgeError::InvalidRowLength { player: 2, opponent: 1 }));
    }

    #[test]
    fn short_row_is_rejected_with_its_position() {
        let p = rows(&["Ah Kh Qh Jh 10h", "2c 3d 4h 5s 7c"]);
        let o = rows(&["9c 9d 9h 9s 2c", "2d 3c"]);
        assert_eq!(
            judge(&p, &o),
            Err(JudgeError::IncompleteRow { side: Side::Opponent, row: 1, len: 2 })
        );
    }

    #[test]
    fn equal_hands_draw() {
        let p = rows(&["Ah Ad 5c 5s 2h"]);
        let o = rows(&["Ac As 5h 5d 2d"]);
        let r = judge(&p, &o).unwrap();
        assert_eq!(r.row(0), Some(Outcome::Draw));
        assert_eq!(r.winner(), Outcome::Draw);
        assert_eq!(r.to_string(), "It's a draw!");
    }

    #[test]
    fn kicker_decides_same_category() {
        let p = rows(&["Kh Kd 9c 4s 3h"]);
        let o = rows(&["Kc Ks 8h 7d 6d"]);
        assert_eq!(judge(&p, &o).unwrap().winner(), Outcome::Player);
    }

    #[test]
    fn decided_only_when_all_rows_full() {
        let full = rows(&["Ah Kh Qh Jh 10h", "2c 3d 4h 5s 7c"]);
        let partial = rows(&["9c 9d 9h 9s 2c", "2d 3c"]);
        assert!(is_decided(&full, &full));
        assert!(!is_decided(&full, &partial));
        let none: Vec<Vec<Card>> = Vec::new();
        assert!(!is_decided(&none, &none));
    }

    #[test]
    fn leading_handles_empty_and_partial_rows() {
        let pair = parse_cards("7c 7d").unwrap();
        let single = parse_cards("Ah").unwrap();
        assert_eq!(leading(&pair, &single), Outcome::Player);
        assert_eq!(leading(&[], &single), Outcome::Opponent);
        assert_eq!(leading(&[], &[]), Outcome::Draw);
    }

    #[test]
    fn preview_reports_labels_and_leaders() {
        let p = rows(&["7c 7d Ah", "Kh"]);
        let o = rows(&["Jc Qd", "Kd", "2c"]);
        let pv = preview(&p, &o);
        assert_eq!(pv.len(), 2);
        assert_eq!(pv[0].leader, Outcome::Player);
        assert_eq!(pv[0].text(Side::Player), "Pair 7");
        assert_eq!(pv[0].text(Side::Opponent), "High Card Q");
        assert_eq!(pv[1].leader, Outcome::Draw);
    }
}
