//! Default automated policy: answer obligations, then thin the hand.

use rustc_hash::FxHashMap;

use super::{Decision, DecisionPolicy, TurnContext};
use crate::cards::{Card, Rank};
use crate::rules::Condition;

/// Greedy hand-thinning policy.
///
/// 1. Facing a draw chain or skip with nothing to answer it, draw the next
///    card if it counters; otherwise take the penalty or sit out.
/// 2. With legal cards, shed the rank held most often among them
///    (ties go to the rank met first), every card of it at once.
/// 3. Otherwise draw one card.
#[derive(Clone, Debug, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    /// First legal card of the most duplicated legal rank.
    fn most_duplicated(legal: &[Card]) -> Option<Card> {
        let mut counts: FxHashMap<Rank, usize> = FxHashMap::default();
        for card in legal {
            *counts.entry(card.rank).or_insert(0) += 1;
        }

        let mut best: Option<(Card, usize)> = None;
        for &card in legal {
            let count = counts[&card.rank];
            if best.map_or(true, |(_, top)| count > top) {
                best = Some((card, count));
            }
        }
        best.map(|(card, _)| card)
    }
}

impl DecisionPolicy for GreedyPolicy {
    fn decide(&self, ctx: &TurnContext<'_>) -> Decision {
        if ctx.condition.is_obligation() && ctx.legal.is_empty() {
            return if ctx.next_card_counters() {
                Decision::ProbeCounter
            } else if matches!(ctx.condition, Condition::DrawChain { .. }) {
                Decision::TakePenalty
            } else {
                Decision::SitOut
            };
        }

        match Self::most_duplicated(ctx.legal) {
            Some(card) => Decision::PlayRank(card),
            None => Decision::DrawOne,
        }
    }
}
