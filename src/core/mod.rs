//! Core engine types: players, RNG, configuration, turn records and the
//! public table snapshot.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{TurnOutcome, TurnRecord};
pub use config::{ExhaustionPolicy, MakaoConfig};
pub use player::{Player, PlayerId, SeatKind};
pub use rng::{GameRng, GameRngState};
pub use state::{PlayerView, RequiredAction, TableState, TurnDirection, TurnPhase};
