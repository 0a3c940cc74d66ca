//! Legal-move computation and the effects of a play.
//!
//! Everything here is a pure function of the hand, the discard top and the
//! [`EffectState`]. The turn engine calls into these functions but never
//! interprets card ranks itself.
//!
//! ## Precedence
//!
//! Exactly one [`Condition`] governs legality at a time. The first that
//! applies wins:
//!
//! | # | Condition | Legal cards |
//! |---|-----------|-------------|
//! | 1 | draw chain on a 2 | any 2, the 3 of the top's suit |
//! | 1 | draw chain on a 3 | any 3, the 2 of the top's suit |
//! | 1 | draw chain on K♥/K♠ | K♥, K♠ |
//! | 2 | skip on a 4 | any 4 |
//! | 3 | demand | the demanded rank |
//! | 4 | Queen on top | everything |
//! | 5 | suit lock on an Ace | Aces, the locked suit, Queens |
//! | 6 | otherwise | top's suit, top's rank, Queens |

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::effects::{EffectKind, EffectState};
use crate::cards::{Card, Rank, Suit};

/// Effects triggered by a single play. Rarely more than two.
pub type TriggeredEffects = SmallVec<[EffectKind; 3]>;

/// The rule that governs legality for the next play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    /// A 2, 3 or penalty King is on top with its chain live.
    DrawChain { top: Card },
    /// A 4 is on top with its skip pending.
    Skip,
    /// A Jack's demand is active.
    Demand(Rank),
    /// A Queen is on top.
    QueenWild,
    /// An Ace is on top and locked a suit.
    SuitLock(Suit),
    /// Ordinary suit/rank matching against the top card.
    Match { top: Card },
}

impl Condition {
    /// Is `card` playable under this condition?
    #[must_use]
    pub fn admits(&self, card: Card) -> bool {
        match *self {
            Condition::DrawChain { top } => match top.rank {
                Rank::Two => {
                    card.rank == Rank::Two || (card.rank == Rank::Three && card.suit == top.suit)
                }
                Rank::Three => {
                    card.rank == Rank::Three || (card.rank == Rank::Two && card.suit == top.suit)
                }
                _ => card.is_penalty_king(),
            },
            Condition::Skip => card.rank == Rank::Four,
            Condition::Demand(rank) => card.rank == rank,
            Condition::QueenWild => true,
            Condition::SuitLock(suit) => {
                card.rank == Rank::Ace || card.suit == suit || card.rank == Rank::Queen
            }
            Condition::Match { top } => {
                card.suit == top.suit || card.rank == top.rank || card.rank == Rank::Queen
            }
        }
    }

    /// Draw chains and skips must be answered or discharged.
    #[must_use]
    pub fn is_obligation(&self) -> bool {
        matches!(self, Condition::DrawChain { .. } | Condition::Skip)
    }
}

/// Determine which condition governs the next play.
#[must_use]
pub fn condition(top: Card, effects: &EffectState) -> Condition {
    if effects.draw_obligation_active && top.draw_penalty().is_some() {
        Condition::DrawChain { top }
    } else if effects.skip_obligation_active && top.rank == Rank::Four {
        Condition::Skip
    } else if let Some(rank) = effects.active_demand {
        Condition::Demand(rank)
    } else if top.rank == Rank::Queen {
        Condition::QueenWild
    } else if let (Some(suit), Rank::Ace) = (effects.locked_suit, top.rank) {
        Condition::SuitLock(suit)
    } else {
        Condition::Match { top }
    }
}

/// Legal cards from `hand`, in hand order.
///
/// Deterministic and side-effect free. The hand holds no duplicates, so
/// the result is a set.
#[must_use]
pub fn legal_moves(hand: &[Card], top: Card, effects: &EffectState) -> Vec<Card> {
    let governing = condition(top, effects);
    hand.iter().copied().filter(|&card| governing.admits(card)).collect()
}

/// Choices a player makes when playing a Jack or an Ace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Rank demanded with a Jack. `None` issues no demand.
    pub demand: Option<Rank>,
    /// Suit locked with an Ace.
    pub suit: Option<Suit>,
}

impl Declaration {
    /// Declare nothing.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            demand: None,
            suit: None,
        }
    }

    /// Demand a rank (Jack).
    #[must_use]
    pub const fn demand(rank: Rank) -> Self {
        Self {
            demand: Some(rank),
            suit: None,
        }
    }

    /// Lock a suit (Ace).
    #[must_use]
    pub const fn suit(suit: Suit) -> Self {
        Self {
            demand: None,
            suit: Some(suit),
        }
    }

    /// A demand needs a Jack and a plain rank; a suit needs an Ace.
    #[must_use]
    pub fn is_valid_for(&self, card: Card) -> bool {
        let demand_ok = match self.demand {
            Some(rank) => card.rank == Rank::Jack && !rank.is_functional(),
            None => true,
        };
        let suit_ok = self.suit.is_none() || card.rank == Rank::Ace;
        demand_ok && suit_ok
    }
}

/// The declaration the rules make on a player's behalf.
///
/// - Jack: demand the lowest plain rank left in `remaining`.
/// - Ace: lock the suit of the last card left in `remaining`.
///
/// `remaining` is the hand after `card` has left it.
#[must_use]
pub fn default_declaration(card: Card, remaining: &[Card]) -> Declaration {
    match card.rank {
        Rank::Jack => Declaration {
            demand: remaining
                .iter()
                .map(|c| c.rank)
                .filter(|rank| !rank.is_functional())
                .min(),
            suit: None,
        },
        Rank::Ace => Declaration {
            demand: None,
            suit: remaining.last().map(|c| c.suit),
        },
        _ => Declaration::none(),
    }
}

/// Clear the demand if `card` meets it. Returns the met rank.
pub fn meet_demand(effects: &mut EffectState, card: Card) -> Option<Rank> {
    match effects.active_demand {
        Some(rank) if rank == card.rank => {
            effects.clear_demand();
            Some(rank)
        }
        _ => None,
    }
}

/// Update `effects` for `card` having just been played.
///
/// Every non-Ace card lifts a suit lock before its own effect applies.
pub fn apply_effects_of_play(
    effects: &mut EffectState,
    card: Card,
    declaration: Declaration,
) -> TriggeredEffects {
    let mut triggered = TriggeredEffects::new();

    if card.rank != Rank::Ace && effects.locked_suit.take().is_some() {
        triggered.push(EffectKind::SuitLockCleared);
    }

    match card.rank {
        Rank::Jack => {
            if let Some(rank) = declaration.demand {
                effects.issue_demand(rank);
                triggered.push(EffectKind::Demand(rank));
            }
        }
        Rank::Four => {
            effects.set_skip();
            triggered.push(EffectKind::Skip);
        }
        Rank::Ace => {
            effects.locked_suit = declaration.suit;
            if let Some(suit) = declaration.suit {
                triggered.push(EffectKind::SuitLock(suit));
            }
        }
        _ => {
            if let Some(added) = card.draw_penalty() {
                effects.add_penalty(added);
                triggered.push(EffectKind::DrawPenalty {
                    added,
                    total: effects.pending_draw_count,
                });
            }
        }
    }

    triggered
}
