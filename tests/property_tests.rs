//! Property tests over whole automated games and the legality rules.

use proptest::prelude::*;

use makao::cards::{Card, Deck, Rank, Suit};
use makao::core::{ExhaustionPolicy, MakaoConfig, TurnOutcome};
use makao::games::makao::Session;
use makao::rules::{legal_moves, EffectState};

const MAX_TURNS: usize = 400;

fn automated(players: usize, seed: u64, config: MakaoConfig) -> Session {
    Session::builder()
        .players((0..players).map(|i| format!("Seat {i}")))
        .seed(seed)
        .config(config)
        .build()
        .unwrap()
}

fn any_card() -> impl Strategy<Value = Card> {
    (0usize..13, 0usize..4).prop_map(|(rank, suit)| Card::new(Rank::ALL[rank], Suit::ALL[suit]))
}

/// Independent statement of the legality table.
fn oracle(card: Card, top: Card, effects: &EffectState) -> bool {
    let penalty_top = match top.rank {
        Rank::Two | Rank::Three => true,
        Rank::King => matches!(top.suit, Suit::Hearts | Suit::Spades),
        _ => false,
    };
    if effects.draw_obligation_active && penalty_top {
        return match top.rank {
            Rank::Two => card.rank == Rank::Two || (card.rank == Rank::Three && card.suit == top.suit),
            Rank::Three => card.rank == Rank::Three || (card.rank == Rank::Two && card.suit == top.suit),
            _ => card.rank == Rank::King && matches!(card.suit, Suit::Hearts | Suit::Spades),
        };
    }
    if effects.skip_obligation_active && top.rank == Rank::Four {
        return card.rank == Rank::Four;
    }
    if let Some(rank) = effects.active_demand {
        return card.rank == rank;
    }
    if top.rank == Rank::Queen {
        return true;
    }
    if let (Some(suit), Rank::Ace) = (effects.locked_suit, top.rank) {
        return card.rank == Rank::Ace || card.rank == Rank::Queen || card.suit == suit;
    }
    card.rank == Rank::Queen || card.rank == top.rank || card.suit == top.suit
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// No card is ever created or lost, whatever the table size.
    #[test]
    fn prop_cards_are_conserved(seed in any::<u64>(), players in 2usize..=8) {
        let mut game = automated(players, seed, MakaoConfig::default());
        for _ in 0..MAX_TURNS {
            if game.advance_automated_turn().is_err() {
                break;
            }
            prop_assert_eq!(game.cards_in_play(), 52 * game.decks_in_play() as usize);
            let effects = game.effects();
            prop_assert!(effects.pending_draw_count == 0 || effects.draw_obligation_active);
        }
    }

    /// When draws can stop short, the single deck is all there ever is.
    #[test]
    fn prop_stop_drawing_keeps_one_deck(seed in any::<u64>(), players in 2usize..=8) {
        let config = MakaoConfig::default().with_exhaustion(ExhaustionPolicy::StopDrawing);
        let mut game = automated(players, seed, config);
        game.run_to_completion(MAX_TURNS);
        prop_assert_eq!(game.decks_in_play(), 1);
        prop_assert_eq!(game.cards_in_play(), 52);
    }

    /// Every lead card played from hand was legal when the turn began, and the
    /// cards shed after it share its rank.
    #[test]
    fn prop_plays_are_legal(seed in any::<u64>(), players in 2usize..=5) {
        let mut game = automated(players, seed, MakaoConfig::default());
        for _ in 0..MAX_TURNS {
            let hand = game.current_player().hand().to_vec();
            let top = game.top_card();
            let mut effects = game.effects().clone();
            // A demand due to expire at this turn's start no longer binds.
            let bound = game.config().demand_bound_for(players);
            effects.tick_demand(bound);
            let legal = legal_moves(&hand, top, &effects);

            let Ok(summary) = game.advance_automated_turn() else { break };
            if let TurnOutcome::Played(card) = summary.outcome {
                prop_assert_eq!(summary.played.first().copied(), Some(card));
                prop_assert!(summary.played.iter().all(|other| other.rank == card.rank));
                if summary.drawn.is_empty() {
                    prop_assert!(legal.contains(&card), "{} was not legal on {}", card, top);
                } else {
                    prop_assert_eq!(summary.drawn.last().copied(), Some(card));
                }
            }
        }
    }

    /// A seed fixes the whole game.
    #[test]
    fn prop_seeded_games_replay(seed in any::<u64>(), players in 2usize..=8) {
        let mut a = automated(players, seed, MakaoConfig::default());
        let mut b = automated(players, seed, MakaoConfig::default());
        let winner_a = a.run_to_completion(MAX_TURNS);
        let winner_b = b.run_to_completion(MAX_TURNS);
        prop_assert_eq!(winner_a, winner_b);
        prop_assert_eq!(a.history(), b.history());
        prop_assert_eq!(a.rng_state(), b.rng_state());
    }

    /// `legal_moves` agrees with the legality table for arbitrary states.
    #[test]
    fn prop_legal_moves_match_table(
        hand in prop::collection::vec(any_card(), 0..10),
        top in any_card(),
        draw_live in any::<bool>(),
        skip_live in any::<bool>(),
        demand in prop::option::of(5usize..=10),
        lock in prop::option::of(0usize..4),
    ) {
        let mut effects = EffectState::new();
        if draw_live {
            effects.add_penalty(2);
        }
        effects.skip_obligation_active = skip_live;
        if let Some(rank) = demand {
            effects.active_demand = Some(Rank::ALL[rank - 2]);
        }
        effects.locked_suit = lock.map(|suit| Suit::ALL[suit]);

        let expected: Vec<Card> = hand
            .iter()
            .copied()
            .filter(|&card| oracle(card, top, &effects))
            .collect();
        prop_assert_eq!(legal_moves(&hand, top, &effects), expected);
    }
}

/// Full decks never repeat a card.
#[test]
fn test_standard_deck_is_a_set() {
    let deck = Deck::standard();
    let mut seen = std::collections::HashSet::new();
    assert!(deck.cards().iter().all(|card| seen.insert(*card)));
    assert_eq!(seen.len(), 52);
}
