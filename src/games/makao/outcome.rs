//! Results returned by the turn engine and the errors it can raise.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::Card;
use crate::core::{PlayerId, TurnOutcome};
use crate::rules::TriggeredEffects;

/// Why a submitted move was refused. A refused move changes nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum RejectionReason {
    #[error("card is not in the player's hand")]
    CardNotInHand,
    #[error("card cannot be played under the condition in force")]
    CardNotLegalUnderActiveEffect,
    #[error("action is not permitted in the current phase")]
    ActionNotPermittedInCurrentPhase,
    #[error("declaration does not fit the card played")]
    InvalidDeclaration,
}

/// Why a session could not be set up.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("{count} players is below the minimum of {min}")]
    TooFewPlayers { count: usize, min: usize },
    #[error("{count} players is above the maximum of {max}")]
    TooManyPlayers { count: usize, max: usize },
    #[error("seat {seat} does not exist at a table of {count}")]
    SeatOutOfRange { seat: usize, count: usize },
    #[error("seat {seat} has an empty name")]
    EmptyName { seat: usize },
    #[error("seat {seat} is interactive and cannot take a policy")]
    PolicyOnInteractiveSeat { seat: usize },
    #[error("dealing needs {needed} cards but a deck holds {available}")]
    HandsExceedDeck { needed: usize, available: usize },
    #[error("arrangement has {found} hands for {expected} players")]
    ArrangementMismatch { expected: usize, found: usize },
    #[error("{0} appears more than once in the arrangement")]
    DuplicateCard(Card),
}

/// Outcome of an interactive play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    pub accepted: bool,
    pub rejection: Option<RejectionReason>,
    /// Effects triggered during the turn, including a demand expiring at
    /// its start.
    pub effects_triggered: TriggeredEffects,
    /// The play left the player holding a single card.
    pub makao: bool,
    pub game_over: bool,
    pub winner: Option<PlayerId>,
}

impl MoveResult {
    #[must_use]
    pub fn rejected(reason: RejectionReason) -> Self {
        Self {
            accepted: false,
            rejection: Some(reason),
            effects_triggered: TriggeredEffects::new(),
            makao: false,
            game_over: false,
            winner: None,
        }
    }

    pub(crate) fn accepted(summary: TurnSummary) -> Self {
        Self {
            accepted: true,
            rejection: None,
            effects_triggered: summary.effects_triggered,
            makao: summary.makao,
            game_over: summary.game_over,
            winner: summary.winner,
        }
    }
}

/// Outcome of an interactive draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResult {
    /// Cards drawn by this call, in draw order.
    pub cards_drawn: Vec<Card>,
    /// The discard pile was shuffled back into the deck during this call.
    pub deck_was_recycled: bool,
    /// `false` when the player may still play the card just drawn.
    pub turn_ended: bool,
}

/// Everything that happened during one completed turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSummary {
    pub player: PlayerId,
    pub drawn: Vec<Card>,
    /// Cards played, in the order they landed. More than one when a seat
    /// sheds several cards of a rank.
    pub played: Vec<Card>,
    pub outcome: TurnOutcome,
    pub effects_triggered: TriggeredEffects,
    pub deck_was_recycled: bool,
    /// The turn ended with a play that left exactly one card in hand.
    pub makao: bool,
    pub game_over: bool,
    pub winner: Option<PlayerId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_result_reports_reason() {
        let result = MoveResult::rejected(RejectionReason::CardNotInHand);
        assert!(!result.accepted);
        assert_eq!(result.rejection, Some(RejectionReason::CardNotInHand));
        assert!(result.effects_triggered.is_empty());
        assert!(!result.makao);
    }

    #[test]
    fn test_setup_error_messages() {
        let err = SetupError::TooFewPlayers { count: 1, min: 2 };
        assert_eq!(err.to_string(), "1 players is below the minimum of 2");

        let err = SetupError::DuplicateCard(Card::new(
            crate::cards::Rank::King,
            crate::cards::Suit::Spades,
        ));
        assert_eq!(err.to_string(), "K of Spades appears more than once in the arrangement");
    }
}
