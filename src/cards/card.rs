//! Card identity: suits, ranks and the `Card` value type.
//!
//! Makao is played with a single French deck of 52 cards. Seven ranks carry
//! special rules and are called *functional*: 2, 3, 4, J, Q, K and A. The
//! remaining ranks (5 through 10) are plain cards, and they are the only
//! ranks a Jack may demand.
//!
//! ## Penalty cards
//!
//! Three kinds of card start or extend a draw chain:
//! - any 2 (two cards),
//! - any 3 (three cards),
//! - the King of Hearts and the King of Spades (five cards).
//!
//! The other two Kings are ordinary cards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Human-readable suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank, ordered from Two to Ace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Ranks a Jack may demand (the non-functional ones).
    pub const DEMANDABLE: [Rank; 6] = [
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
    ];

    /// Does this rank carry a special rule?
    #[must_use]
    pub const fn is_functional(self) -> bool {
        matches!(
            self,
            Rank::Two | Rank::Three | Rank::Four | Rank::Jack | Rank::Queen | Rank::King | Rank::Ace
        )
    }

    /// Short symbol used in card names ("2".."10", "J", "Q", "K", "A").
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A playing card. Immutable; equality by `(rank, suit)`.
///
/// ```
/// use makao::cards::{Card, Rank, Suit};
///
/// let king: Card = "K of Spades".parse().unwrap();
/// assert_eq!(king, Card::new(Rank::King, Suit::Spades));
/// assert_eq!(king.draw_penalty(), Some(5));
/// assert_eq!(king.to_string(), "K of Spades");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Does this card carry a special rule?
    #[must_use]
    pub const fn is_functional(self) -> bool {
        self.rank.is_functional()
    }

    /// King of Hearts or King of Spades.
    #[must_use]
    pub const fn is_penalty_king(self) -> bool {
        matches!(self.rank, Rank::King) && matches!(self.suit, Suit::Hearts | Suit::Spades)
    }

    /// Cards added to a draw chain when this card is played, if any.
    #[must_use]
    pub const fn draw_penalty(self) -> Option<u32> {
        match self.rank {
            Rank::Two => Some(2),
            Rank::Three => Some(3),
            Rank::King if self.is_penalty_king() => Some(5),
            _ => None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Error returned when parsing a card name fails.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid card name: {0:?}")]
pub struct ParseCardError(pub String);

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses names of the form `"<rank> of <suit>"`, e.g. `"10 of Hearts"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCardError(s.to_string());
        let (rank, suit) = s.trim().split_once(" of ").ok_or_else(err)?;
        let rank = Rank::ALL
            .into_iter()
            .find(|r| r.symbol().eq_ignore_ascii_case(rank.trim()))
            .ok_or_else(err)?;
        let suit = Suit::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(suit.trim()))
            .ok_or_else(err)?;
        Ok(Card::new(rank, suit))
    }
}
