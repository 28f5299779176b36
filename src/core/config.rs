//! Game configuration.
//!
//! `GameConfig` controls the starting hand size (which fixes the whole
//! round/set schedule), whether snapshots are kept for `step_back`, and
//! how the dealer's shuffle is seeded.
//!
//! Options can be built in code or parsed from a JSON object:
//!
//! ```
//! use judgement_engine::core::GameConfig;
//!
//! let config = GameConfig::from_json(r#"{ "starting_set_cards": 5 }"#).unwrap();
//! assert_eq!(config.starting_set_cards, 5);
//! assert!(config.allow_step_back);
//! assert_eq!(config.total_rounds(), 15);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest hand size a four-seat table can deal from 52 cards.
pub const MAX_HAND_SIZE: u32 = 13;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Hand size of the first round, and the number of sets in the match.
    pub starting_set_cards: u32,

    /// Keep a snapshot before every step so `step_back` can undo it.
    pub allow_step_back: bool,

    /// Shuffle seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_set_cards: MAX_HAND_SIZE,
            allow_step_back: true,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration (13 cards, step-back on, entropy seed).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON object. Unknown keys are ignored.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the starting hand size.
    #[must_use]
    pub fn with_starting_set_cards(mut self, cards: u32) -> Self {
        self.starting_set_cards = cards;
        self
    }

    /// Enable or disable snapshot history.
    #[must_use]
    pub fn with_step_back(mut self, allow: bool) -> Self {
        self.allow_step_back = allow;
        self
    }

    /// Use a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject configurations that cannot start a match.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_HAND_SIZE).contains(&self.starting_set_cards) {
            return Err(ConfigError::InvalidStartingSetCards(self.starting_set_cards));
        }
        Ok(())
    }

    /// Rounds in a full match: N + (N-1) + ... + 1.
    #[must_use]
    pub fn total_rounds(&self) -> u32 {
        let n = self.starting_set_cards;
        n * (n + 1) / 2
    }
}
