//! Cards, the draw deck and the discard pile.

pub mod card;
pub mod deck;

pub use card::{Card, ParseCardError, Rank, Suit};
pub use deck::{Deck, DiscardPile, DECK_SIZE};
