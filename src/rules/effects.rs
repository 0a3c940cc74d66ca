//! Session-scoped record of the special-card conditions in force.
//!
//! One `EffectState` lives in each session and is passed explicitly to the
//! rule functions. It tracks:
//! - the draw chain (pending count and whether it is live),
//! - a pending skip from a "4",
//! - a Jack's demand and its decay counter,
//! - an Ace's suit lock.

use serde::{Deserialize, Serialize};

use crate::cards::{Rank, Suit};

/// Special conditions currently in force.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectState {
    /// Cards owed by the next player who cannot counter the chain.
    pub pending_draw_count: u32,

    /// A draw chain (or a Jack's demand) is live.
    pub draw_obligation_active: bool,

    /// The next player must play a "4" or sit out.
    pub skip_obligation_active: bool,

    /// Rank demanded by the last Jack.
    pub active_demand: Option<Rank>,

    /// Turns since the demand was issued, starting at 1.
    pub demand_decay: u32,

    /// Suit named by the last Ace.
    pub locked_suit: Option<Suit>,
}

impl EffectState {
    /// No conditions in force.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Nothing pending at all.
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        *self == Self::default()
    }

    /// Extend the draw chain.
    pub fn add_penalty(&mut self, cards: u32) {
        self.draw_obligation_active = true;
        self.pending_draw_count += cards;
    }

    /// Discharge the draw chain. Returns the number of cards owed.
    pub fn take_penalty(&mut self) -> u32 {
        self.draw_obligation_active = false;
        std::mem::take(&mut self.pending_draw_count)
    }

    pub fn set_skip(&mut self) {
        self.skip_obligation_active = true;
    }

    pub fn discharge_skip(&mut self) {
        self.skip_obligation_active = false;
    }

    /// Issue a demand. A demand carries the draw obligation with it.
    pub fn issue_demand(&mut self, rank: Rank) {
        self.active_demand = Some(rank);
        self.demand_decay = 1;
        self.draw_obligation_active = true;
    }

    /// Clear the demand and the draw obligation it carried.
    pub fn clear_demand(&mut self) {
        self.active_demand = None;
        self.demand_decay = 0;
        self.draw_obligation_active = false;
    }

    /// Age the demand by one turn.
    ///
    /// Returns the demanded rank if the demand expired on this tick.
    pub fn tick_demand(&mut self, bound: u32) -> Option<Rank> {
        let rank = self.active_demand?;
        self.demand_decay += 1;
        if self.demand_decay > bound {
            self.clear_demand();
            Some(rank)
        } else {
            None
        }
    }
}

/// Effects reported back to callers after a play or at turn start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    /// A draw chain grew by `added`, now owing `total`.
    DrawPenalty { added: u32, total: u32 },
    /// The next player must play a "4" or sit out.
    Skip,
    /// A Jack demanded this rank.
    Demand(Rank),
    /// The demanded rank was played.
    DemandMet(Rank),
    /// The demand ran out of turns.
    DemandExpired(Rank),
    /// An Ace locked this suit.
    SuitLock(Suit),
    /// A non-Ace card lifted the suit lock.
    SuitLockCleared,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_penalty_accumulates() {
        let mut effects = EffectState::new();
        effects.add_penalty(2);
        effects.add_penalty(3);

        assert!(effects.draw_obligation_active);
        assert_eq!(effects.pending_draw_count, 5);

        assert_eq!(effects.take_penalty(), 5);
        assert!(!effects.draw_obligation_active);
        assert_eq!(effects.pending_draw_count, 0);
        assert!(effects.is_quiet());
    }

    #[test]
    fn test_skip() {
        let mut effects = EffectState::new();
        effects.set_skip();
        assert!(effects.skip_obligation_active);
        effects.discharge_skip();
        assert!(effects.is_quiet());
    }

    #[test]
    fn test_demand_decay() {
        let mut effects = EffectState::new();
        effects.issue_demand(Rank::Seven);

        assert_eq!(effects.demand_decay, 1);
        assert!(effects.draw_obligation_active);

        assert_eq!(effects.tick_demand(3), None);
        assert_eq!(effects.tick_demand(3), None);
        assert_eq!(effects.demand_decay, 3);
        assert_eq!(effects.tick_demand(3), Some(Rank::Seven));
        assert_eq!(effects.active_demand, None);
        assert!(!effects.draw_obligation_active);
    }

    #[test]
    fn test_tick_without_demand() {
        let mut effects = EffectState::new();
        assert_eq!(effects.tick_demand(1), None);
        assert_eq!(effects.demand_decay, 0);
    }

    #[test]
    fn test_effect_state_serialization() {
        let mut effects = EffectState::new();
        effects.issue_demand(Rank::Nine);
        effects.locked_suit = Some(Suit::Clubs);

        let json = serde_json::to_string(&effects).unwrap();
        let deserialized: EffectState = serde_json::from_str(&json).unwrap();
        assert_eq!(effects, deserialized);
    }
}
