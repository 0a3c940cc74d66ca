//! Turn phases and the public table snapshot.
//!
//! ## TurnPhase
//!
//! The turn engine walks each seat through
//! `AwaitingTurnStart → EvaluatingEffects → AwaitingMove → ApplyingMove →
//! CheckingWinCondition → AdvancingSeat` until someone empties their hand
//! (`Terminal`). Only `AwaitingTurnStart`, `AwaitingMove` and `Terminal`
//! are observable between calls; the rest are passed through inside one
//! call.
//!
//! ## TableState
//!
//! What a presentation layer may show: the top card, conditions in force,
//! whose turn it is, what they must do, and public per-seat information.
//! Hands are not included, only their sizes.

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId, SeatKind};
use crate::cards::Card;
use crate::rules::EffectState;

/// Position of the turn engine within a seat's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    AwaitingTurnStart,
    EvaluatingEffects,
    /// Suspended until the interactive seat submits a move.
    AwaitingMove,
    ApplyingMove,
    CheckingWinCondition,
    AdvancingSeat,
    /// A player emptied their hand.
    Terminal { winner: PlayerId },
}

impl TurnPhase {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnPhase::Terminal { .. })
    }
}

/// Direction the seat pointer moves after each turn.
///
/// No card reverses play today; the direction is part of the table model so
/// a variant with reversal can be added without touching the turn engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl TurnDirection {
    /// The opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            TurnDirection::Clockwise => TurnDirection::CounterClockwise,
            TurnDirection::CounterClockwise => TurnDirection::Clockwise,
        }
    }

    /// Seat index after `current` at a table of `player_count` seats.
    #[must_use]
    pub fn next_seat(self, current: usize, player_count: usize) -> usize {
        match self {
            TurnDirection::Clockwise => (current + 1) % player_count,
            TurnDirection::CounterClockwise => (current + player_count - 1) % player_count,
        }
    }
}

/// What the interactive seat must do to close its move window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequiredAction {
    /// Play a legal card or draw one.
    PlayOrDraw,
    /// Counter the draw chain or draw (the probe, then the penalty).
    CounterOrTakePenalty { pending: u32 },
    /// Play a "4" or pass to sit out. Drawing probes for a "4".
    PlayFourOrSitOut,
    /// Play the card just drawn, or pass.
    PlayDrawnOrPass { card: Card },
    /// Play the probed counter, or draw the penalty.
    PlayProbedOrTakePenalty { card: Card, pending: u32 },
    /// Play the probed "4", or pass to sit out.
    PlayProbedOrSitOut { card: Card },
}

/// Public information about one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub seat: SeatKind,
    pub hand_size: usize,
    pub is_waiting_out: bool,
    pub waiting_turns_remaining: u32,
    pub has_drawn_this_turn: bool,
    pub played_this_turn: bool,
    pub last_card_played: Option<Card>,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id(),
            name: player.name().to_string(),
            seat: player.seat(),
            hand_size: player.hand_size(),
            is_waiting_out: player.is_waiting_out(),
            waiting_turns_remaining: player.waiting_turns_remaining(),
            has_drawn_this_turn: player.has_drawn_this_turn(),
            played_this_turn: player.played_this_turn(),
            last_card_played: player.last_card_played(),
        }
    }
}

/// Snapshot of the table for presentation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    pub top_card: Card,
    pub effects: EffectState,
    pub current_seat: PlayerId,
    pub phase: TurnPhase,
    /// Set only while the interactive seat is in `AwaitingMove`.
    pub required_action: Option<RequiredAction>,
    /// Turn number (starts at 1).
    pub turn_number: u32,
    pub deck_size: usize,
    pub discard_size: usize,
    pub players: Vec<PlayerView>,
    pub winner: Option<PlayerId>,
}
