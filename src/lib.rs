//! # makao
//!
//! A rules engine for Makao, the Eastern European shedding card game.
//!
//! ## Design Principles
//!
//! 1. **Rules as data flow**: legality and card effects are pure functions
//!    of the hand, the discard top and an explicit [`EffectState`]. The turn
//!    engine never interprets card ranks itself.
//!
//! 2. **N-Player First**: tables of 2-8 seats, any of which may be
//!    automated. At most one seat is driven from outside.
//!
//! 3. **Deterministic**: all shuffling goes through a seeded [`GameRng`],
//!    so a seed and a move sequence reproduce a game exactly.
//!
//! ## Modules
//!
//! - `cards`: ranks, suits, the deck and the discard pile
//! - `core`: players, configuration, RNG, turn phases and history
//! - `rules`: effect bookkeeping and legal-move evaluation
//! - `policy`: decision policies for automated seats
//! - `games`: the Makao turn engine and session setup

pub mod cards;
pub mod core;
pub mod games;
pub mod policy;
pub mod rules;

// Re-export commonly used types
pub use crate::cards::{Card, Deck, DiscardPile, Rank, Suit, DECK_SIZE};

pub use crate::core::{
    ExhaustionPolicy, GameRng, GameRngState, MakaoConfig, Player, PlayerId, PlayerView,
    RequiredAction, SeatKind, TableState, TurnDirection, TurnOutcome, TurnPhase, TurnRecord,
};

pub use crate::rules::{Condition, Declaration, EffectKind, EffectState};

pub use crate::policy::{Decision, DecisionPolicy, GreedyPolicy, TurnContext};

pub use crate::games::makao::{
    Arrangement, DrawResult, MakaoBuilder, MoveResult, RejectionReason, Session, SetupError,
    TurnSummary,
};
