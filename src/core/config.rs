//! Table and rule configuration.
//!
//! `MakaoConfig` holds the knobs the rules leave open: hand size, seat
//! limits, how long a Jack's demand lasts, what a "4" costs and what happens
//! when the deck cannot be refilled. Defaults reproduce the classic game.
//!
//! ```
//! use makao::core::{ExhaustionPolicy, MakaoConfig};
//!
//! let config = MakaoConfig::default()
//!     .with_hand_size(6)
//!     .with_exhaustion(ExhaustionPolicy::StopDrawing);
//! assert_eq!(config.hand_size, 6);
//! assert_eq!(config.demand_bound_for(4), 4);
//! ```

use serde::{Deserialize, Serialize};

/// What a draw does when both the deck and the discard pile (below its top)
/// are empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExhaustionPolicy {
    /// Bring a fresh shuffled 52-card deck into play. Cards already in play
    /// are not removed, so duplicates become possible.
    #[default]
    FreshDeck,
    /// Stop drawing; the player receives fewer cards than owed.
    StopDrawing,
}

/// Rule and table configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakaoConfig {
    /// Cards dealt to each player at setup.
    pub hand_size: usize,

    /// Fewest seats a table may have.
    pub min_players: usize,

    /// Most seats a table may have.
    pub max_players: usize,

    /// Demand decay bound. A demand is cleared once its decay counter
    /// (1 when issued, +1 per turn) exceeds this value. `None` means the
    /// player count, so a demand binds every other seat once.
    pub demand_bound: Option<u32>,

    /// Clear a demand as soon as someone plays the demanded rank.
    pub demand_ends_when_met: bool,

    /// Turns lost when a skip is discharged, the current one included.
    pub skip_turns: u32,

    /// Behaviour when no card can be drawn.
    pub exhaustion: ExhaustionPolicy,
}

impl Default for MakaoConfig {
    fn default() -> Self {
        Self {
            hand_size: 5,
            min_players: 2,
            max_players: 8,
            demand_bound: None,
            demand_ends_when_met: true,
            skip_turns: 1,
            exhaustion: ExhaustionPolicy::FreshDeck,
        }
    }
}

impl MakaoConfig {
    /// Set the starting hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the seat limits.
    #[must_use]
    pub fn with_player_limits(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Fix the demand decay bound instead of deriving it from the player count.
    #[must_use]
    pub fn with_demand_bound(mut self, bound: u32) -> Self {
        self.demand_bound = Some(bound);
        self
    }

    /// Keep a demand alive for its whole window even after it is met.
    #[must_use]
    pub fn with_demand_ends_when_met(mut self, ends: bool) -> Self {
        self.demand_ends_when_met = ends;
        self
    }

    /// Set how many turns a discharged skip costs (at least 1).
    #[must_use]
    pub fn with_skip_turns(mut self, turns: u32) -> Self {
        self.skip_turns = turns.max(1);
        self
    }

    /// Set the deck exhaustion behaviour.
    #[must_use]
    pub fn with_exhaustion(mut self, exhaustion: ExhaustionPolicy) -> Self {
        self.exhaustion = exhaustion;
        self
    }

    /// Effective demand bound for a table of `player_count` seats.
    #[must_use]
    pub fn demand_bound_for(&self, player_count: usize) -> u32 {
        self.demand_bound.unwrap_or(player_count as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MakaoConfig::default();

        assert_eq!(config.hand_size, 5);
        assert_eq!((config.min_players, config.max_players), (2, 8));
        assert!(config.demand_ends_when_met);
        assert_eq!(config.skip_turns, 1);
        assert_eq!(config.exhaustion, ExhaustionPolicy::FreshDeck);
    }

    #[test]
    fn test_demand_bound() {
        assert_eq!(MakaoConfig::default().demand_bound_for(3), 3);
        assert_eq!(MakaoConfig::default().with_demand_bound(2).demand_bound_for(3), 2);
    }

    #[test]
    fn test_skip_turns_floor() {
        assert_eq!(MakaoConfig::default().with_skip_turns(0).skip_turns, 1);
        assert_eq!(MakaoConfig::default().with_skip_turns(3).skip_turns, 3);
    }

    #[test]
    fn test_config_serialization() {
        let config = MakaoConfig::default()
            .with_player_limits(2, 4)
            .with_exhaustion(ExhaustionPolicy::StopDrawing);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MakaoConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }
}
