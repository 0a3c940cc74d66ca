//! Makao for 2-8 players.
//!
//! Each player starts with five cards. On your turn, play a card matching
//! the top of the discard pile by suit or rank, or draw. Special cards
//! stack draw penalties (2, 3, K♥, K♠), skip the next player (4), demand a
//! rank (J), lock a suit (A) or match anything (Q). First to empty their
//! hand wins.
//!
//! ```
//! use makao::games::makao::Session;
//!
//! let mut session = Session::builder()
//!     .players(["Ann", "Bob", "Cleo"])
//!     .seed(2024)
//!     .build()
//!     .unwrap();
//!
//! if let Some(winner) = session.run_to_completion(10_000) {
//!     assert_eq!(session.player(winner).unwrap().hand_size(), 0);
//! }
//! assert_eq!(session.cards_in_play(), 52 * session.decks_in_play() as usize);
//! ```

mod builder;
mod outcome;
mod session;

pub use builder::{Arrangement, MakaoBuilder};
pub use outcome::{DrawResult, MoveResult, RejectionReason, SetupError, TurnSummary};
pub use session::Session;
