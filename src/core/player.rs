//! Player identity, seat kind and per-seat hand/turn data.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. Ids are assigned in seat order at game
//! creation (`PlayerId(0)` is the first seat) and never reused.
//!
//! ## Player
//!
//! Plain data: name, hand and the flags the turn engine maintains. How a
//! seat decides what to do is not stored here; the session pairs each
//! automated seat with a [`DecisionPolicy`](crate::policy::DecisionPolicy).

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Player identifier supporting up to 255 seats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a table of `player_count` seats.
    ///
    /// ```
    /// use makao::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Who makes the decisions for a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeatKind {
    /// Decisions arrive from outside through the session's submit calls.
    Interactive,
    /// Decisions come from the seat's policy inside `advance_automated_turn`.
    Automated,
}

/// A seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    seat: SeatKind,
    hand: Vec<Card>,
    is_waiting_out: bool,
    waiting_turns_remaining: u32,
    has_drawn_this_turn: bool,
    played_this_turn: bool,
    last_card_played: Option<Card>,
}

impl Player {
    /// Create a player with an empty hand.
    pub fn new(id: PlayerId, name: impl Into<String>, seat: SeatKind) -> Self {
        Self {
            id,
            name: name.into(),
            seat,
            hand: Vec::new(),
            is_waiting_out: false,
            waiting_turns_remaining: 0,
            has_drawn_this_turn: false,
            played_this_turn: false,
            last_card_played: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn seat(&self) -> SeatKind {
        self.seat
    }

    #[must_use]
    pub fn is_automated(&self) -> bool {
        self.seat == SeatKind::Automated
    }

    /// Cards in hand, in the order they were received.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    /// The hand as it would be after `card` leaves it.
    #[must_use]
    pub fn hand_without(&self, card: Card) -> Vec<Card> {
        let mut rest = self.hand.clone();
        if let Some(pos) = rest.iter().position(|&c| c == card) {
            rest.remove(pos);
        }
        rest
    }

    /// Sitting out because of a skip.
    #[must_use]
    pub fn is_waiting_out(&self) -> bool {
        self.is_waiting_out
    }

    /// Further turns this seat must sit out.
    #[must_use]
    pub fn waiting_turns_remaining(&self) -> u32 {
        self.waiting_turns_remaining
    }

    #[must_use]
    pub fn has_drawn_this_turn(&self) -> bool {
        self.has_drawn_this_turn
    }

    #[must_use]
    pub fn played_this_turn(&self) -> bool {
        self.played_this_turn
    }

    #[must_use]
    pub fn last_card_played(&self) -> Option<Card> {
        self.last_card_played
    }

    // === Engine-side mutation ===

    pub(crate) fn receive(&mut self, card: Card) {
        self.hand.push(card);
        self.has_drawn_this_turn = true;
    }

    /// Deal a card without marking a draw (setup).
    pub(crate) fn deal(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Remove a card from the hand.
    ///
    /// Returns true if the card was found and removed.
    pub(crate) fn remove(&mut self, card: Card) -> bool {
        if let Some(pos) = self.hand.iter().position(|&c| c == card) {
            self.hand.remove(pos);
            true
        } else {
            false
        }
    }

    pub(crate) fn record_play(&mut self, card: Card) {
        self.played_this_turn = true;
        self.last_card_played = Some(card);
    }

    /// Clear per-turn flags at the start of this seat's turn.
    pub(crate) fn begin_turn(&mut self) {
        self.has_drawn_this_turn = false;
        self.played_this_turn = false;
    }

    /// Start sitting out; `extra_turns` further turns are lost after this one.
    pub(crate) fn sit_out(&mut self, extra_turns: u32) {
        self.is_waiting_out = true;
        self.waiting_turns_remaining = extra_turns;
    }

    /// Consume one waiting turn. Returns false if the seat was free to act.
    pub(crate) fn consume_waiting_turn(&mut self) -> bool {
        if self.waiting_turns_remaining > 0 {
            self.waiting_turns_remaining -= 1;
            self.is_waiting_out = true;
            true
        } else {
            self.is_waiting_out = false;
            false
        }
    }
}
