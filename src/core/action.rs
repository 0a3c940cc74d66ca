//! Turn outcomes and the action history.
//!
//! Every resolved seat turn is recorded as a [`TurnRecord`]: who acted,
//! which cards they drew along the way, and how the turn ended. The
//! history is kept in an `im::Vector` so session snapshots stay cheap to
//! clone.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::Card;

/// How a seat's turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Played a card onto the discard pile.
    Played(Card),
    /// Drew a whole draw chain of this many cards.
    TookPenalty(u32),
    /// Drew (or could not draw) and did not play.
    Passed,
    /// Accepted a skip.
    SatOut,
    /// Lost the turn to an earlier skip.
    Waited,
}

impl TurnOutcome {
    /// The card played, if any.
    #[must_use]
    pub fn played(&self) -> Option<Card> {
        match self {
            TurnOutcome::Played(card) => Some(*card),
            _ => None,
        }
    }
}

/// A resolved seat turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The seat that held the turn.
    pub player: PlayerId,

    /// Turn number (starts at 1, one per seat turn).
    pub turn: u32,

    /// Cards drawn during the turn, in draw order.
    pub drawn: Vec<Card>,

    /// Cards played during the turn, in the order they landed.
    pub played: Vec<Card>,

    /// How the turn ended.
    pub outcome: TurnOutcome,
}

impl TurnRecord {
    /// Create a new turn record. `played` holds the outcome's card, if any.
    #[must_use]
    pub fn new(player: PlayerId, turn: u32, drawn: Vec<Card>, outcome: TurnOutcome) -> Self {
        Self {
            player,
            turn,
            drawn,
            played: outcome.played().into_iter().collect(),
            outcome,
        }
    }

    /// Replace the cards played, for turns that shed several of a rank.
    #[must_use]
    pub fn with_played(mut self, played: Vec<Card>) -> Self {
        self.played = played;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_played_card() {
        let card = Card::new(Rank::Seven, Suit::Hearts);
        assert_eq!(TurnOutcome::Played(card).played(), Some(card));
        assert_eq!(TurnOutcome::TookPenalty(5).played(), None);
        assert_eq!(TurnOutcome::Waited.played(), None);
    }

    #[test]
    fn test_turn_record_serialization() {
        let record = TurnRecord::new(
            PlayerId::new(1),
            3,
            vec![Card::new(Rank::Two, Suit::Clubs)],
            TurnOutcome::Played(Card::new(Rank::Two, Suit::Clubs)),
        );

        assert_eq!(record.played, vec![Card::new(Rank::Two, Suit::Clubs)]);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: TurnRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
