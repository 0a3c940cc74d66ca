//! Decision policies for automated seats.
//!
//! A policy sees a read-only [`TurnContext`] and returns a [`Decision`]; the
//! turn engine validates and executes it. Policies are trait objects
//! selected per seat when the session is built, so new strategies slot in
//! without touching the engine.

mod greedy;

pub use greedy::GreedyPolicy;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::rules::{default_declaration, Condition, Declaration, EffectState};

/// What an automated seat sees when it is asked to act.
#[derive(Clone, Copy, Debug)]
pub struct TurnContext<'a> {
    /// The seat's hand.
    pub hand: &'a [Card],
    /// Top of the discard pile.
    pub top: Card,
    /// Conditions in force.
    pub effects: &'a EffectState,
    /// The governing condition for this turn.
    pub condition: Condition,
    /// Legal cards from `hand`, in hand order.
    pub legal: &'a [Card],
    /// The card the next draw would return.
    pub next_card: Option<Card>,
}

impl TurnContext<'_> {
    /// Would the next card from the deck answer the current condition?
    #[must_use]
    pub fn next_card_counters(&self) -> bool {
        self.next_card.is_some_and(|card| self.condition.admits(card))
    }
}

/// A move chosen by a policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Play a legal card from hand.
    Play(Card),
    /// Play a legal card, then every other card of its rank in hand that is
    /// still legal when its turn to land comes.
    PlayRank(Card),
    /// Draw the deck's next card and play it as a counter.
    ProbeCounter,
    /// Draw the whole pending draw chain.
    TakePenalty,
    /// Accept a skip and sit out.
    SitOut,
    /// Draw one card; play it if it is legal.
    DrawOne,
}

/// Policy for automated seats.
pub trait DecisionPolicy: Send + Sync + std::fmt::Debug {
    /// Choose this turn's move.
    fn decide(&self, ctx: &TurnContext<'_>) -> Decision;

    /// Choose the Jack demand or Ace suit for a card about to be played.
    ///
    /// `remaining` is the hand after `card` has left it.
    fn declare(&self, card: Card, remaining: &[Card]) -> Declaration {
        default_declaration(card, remaining)
    }
}
