//! The shared draw deck and the discard pile.
//!
//! Both are stacks whose top is the end of the backing `Vec`. The deck owns
//! every card that is neither in a hand nor on the discard pile; moving cards
//! between the two happens only through [`Deck::recycle_from`].

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::rng::GameRng;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Ordered draw stack (top = end of vec).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A full 52-card deck in suit-major order (Hearts 2..A first).
    #[must_use]
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    /// A full deck, shuffled.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::standard();
        deck.shuffle(rng);
        deck
    }

    /// Build a deck from cards in stack order: the last card is drawn first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Cards in stack order (top = last).
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Pop the top card. Returns `None` when the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// The card the next `draw` would return, without drawing it.
    #[must_use]
    pub fn peek(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Put a card back on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Uniform random permutation (Fisher-Yates).
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Move every discard card except the top into the deck, then shuffle.
    ///
    /// Returns the number of cards moved. Does nothing (and does not
    /// shuffle) when the discard pile holds only its top card.
    pub fn recycle_from(&mut self, discard: &mut DiscardPile, rng: &mut GameRng) -> usize {
        let recycled = discard.take_all_but_top();
        let moved = recycled.len();
        if moved > 0 {
            self.cards.extend(recycled);
            self.shuffle(rng);
        }
        moved
    }
}

/// Discard pile. Never empty: the top card is stored apart from the
/// cards beneath it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardPile {
    /// Cards under the top, oldest first.
    under: Vec<Card>,
    top: Card,
}

impl DiscardPile {
    /// Start a pile with its first card.
    #[must_use]
    pub fn new(top: Card) -> Self {
        Self { under: Vec::new(), top }
    }

    /// Build a pile from the cards beneath the top (oldest first) and the top.
    #[must_use]
    pub fn with_under(under: Vec<Card>, top: Card) -> Self {
        Self { under, top }
    }

    /// The last card played.
    #[must_use]
    pub fn top(&self) -> Card {
        self.top
    }

    /// Total cards on the pile, top included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.under.len() + 1
    }

    /// Always false; present for symmetry with [`Deck::is_empty`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Place a card on top.
    pub fn push(&mut self, card: Card) {
        let previous = std::mem::replace(&mut self.top, card);
        self.under.push(previous);
    }

    /// Remove and return everything under the top card.
    pub fn take_all_but_top(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.under)
    }

    /// All cards, oldest first, top last.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.under.iter().chain(std::iter::once(&self.top))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_deck() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), DECK_SIZE);

        let mut cards = deck.cards().to_vec();
        cards.sort();
        cards.dedup();
        assert_eq!(cards.len(), DECK_SIZE);
    }

    #[test]
    fn test_draw_from_top() {
        let mut deck = Deck::from_cards(vec![
            Card::new(Rank::Five, Suit::Hearts),
            Card::new(Rank::Six, Suit::Clubs),
        ]);

        assert_eq!(deck.peek(), Some(Card::new(Rank::Six, Suit::Clubs)));
        assert_eq!(deck.draw(), Some(Card::new(Rank::Six, Suit::Clubs)));
        assert_eq!(deck.draw(), Some(Card::new(Rank::Five, Suit::Hearts)));
        assert_eq!(deck.draw(), None);
        assert_eq!(deck.peek(), None);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(42);
        let deck = Deck::shuffled(&mut rng);

        assert_ne!(deck, Deck::standard());
        let mut cards = deck.cards().to_vec();
        cards.sort();
        let mut expected = Deck::standard().cards().to_vec();
        expected.sort();
        assert_eq!(cards, expected);
    }

    #[test]
    fn test_shuffle_fairness() {
        // Every card should land at every position close to trials / 52 times.
        const TRIALS: usize = 26_000;
        let mut rng = GameRng::new(7);
        // Index in `Deck::standard()` order.
        let index_of = |card: Card| card.suit as usize * 13 + card.rank as usize;

        let mut counts = vec![[0u32; DECK_SIZE]; DECK_SIZE];
        for _ in 0..TRIALS {
            let deck = Deck::shuffled(&mut rng);
            for (position, &card) in deck.cards().iter().enumerate() {
                counts[index_of(card)][position] += 1;
            }
        }

        let expected = (TRIALS / DECK_SIZE) as f64;
        let mut chi_square = 0.0;
        for row in &counts {
            for &observed in row {
                let observed = f64::from(observed);
                assert!(
                    (observed - expected).abs() < 150.0,
                    "cell count {observed} too far from {expected}"
                );
                chi_square += (observed - expected).powi(2) / expected;
            }
        }

        // 51 * 51 degrees of freedom; mean 2601, sd ~72.
        let dof = ((DECK_SIZE - 1) * (DECK_SIZE - 1)) as f64;
        assert!(chi_square < dof + 6.0 * (2.0 * dof).sqrt(), "chi-square {chi_square}");
    }

    #[test]
    fn test_recycle_keeps_top() {
        let mut rng = GameRng::new(1);
        let mut deck = Deck::default();
        let mut discard = DiscardPile::new(Card::new(Rank::Five, Suit::Hearts));
        discard.push(Card::new(Rank::Five, Suit::Clubs));
        discard.push(Card::new(Rank::Nine, Suit::Clubs));

        let moved = deck.recycle_from(&mut discard, &mut rng);

        assert_eq!(moved, 2);
        assert_eq!(deck.len(), 2);
        assert_eq!(discard.len(), 1);
        assert_eq!(discard.top(), Card::new(Rank::Nine, Suit::Clubs));
        assert!(deck.cards().contains(&Card::new(Rank::Five, Suit::Hearts)));
        assert!(deck.cards().contains(&Card::new(Rank::Five, Suit::Clubs)));
    }

    #[test]
    fn test_recycle_single_card_pile() {
        let mut rng = GameRng::new(1);
        let mut deck = Deck::from_cards(vec![Card::new(Rank::Six, Suit::Spades)]);
        let mut discard = DiscardPile::new(Card::new(Rank::Five, Suit::Hearts));

        assert_eq!(deck.recycle_from(&mut discard, &mut rng), 0);
        assert_eq!(deck.cards(), &[Card::new(Rank::Six, Suit::Spades)]);
        assert_eq!(discard.len(), 1);
    }

    #[test]
    fn test_discard_iter_order() {
        let mut discard = DiscardPile::new(Card::new(Rank::Five, Suit::Hearts));
        discard.push(Card::new(Rank::Six, Suit::Hearts));

        let cards: Vec<_> = discard.iter().copied().collect();
        assert_eq!(
            cards,
            vec![Card::new(Rank::Five, Suit::Hearts), Card::new(Rank::Six, Suit::Hearts)]
        );
    }
}
