//! Match rules configuration.
//!
//! `RulesConfig` holds the numeric rules a duel runs under. The defaults
//! are the standard duel: 15 hit points, a 5-card opening hand, a 7-card
//! hand limit and one land per turn.
//!
//! Configurations can be built in code with the `with_*` builders or loaded
//! from JSON:
//!
//! ```
//! use manaforge::core::RulesConfig;
//!
//! let config = RulesConfig::from_json(r#"{ "starting_hp": 20 }"#).unwrap();
//! assert_eq!(config.starting_hp, 20);
//! assert_eq!(config.hand_limit, 7);
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Numeric rules for a duel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Hit points each player starts with.
    pub starting_hp: i32,

    /// Maximum cards in hand. Draws beyond this go to the discard pile.
    pub hand_limit: usize,

    /// Cards dealt to each player before the first turn.
    pub opening_hand: usize,

    /// Lands a player may put into play per turn.
    pub lands_per_turn: u32,

    /// A player whose hit points fall to or below this value is defeated.
    pub defeat_threshold: i32,

    /// When set, the upkeep stat reset also restores printed abilities.
    pub reset_abilities_at_upkeep: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_hp: 15,
            hand_limit: 7,
            opening_hand: 5,
            lands_per_turn: 1,
            defeat_threshold: 0,
            reset_abilities_at_upkeep: false,
        }
    }
}

impl RulesConfig {
    /// Standard duel rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configurations no match can be played under.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_limit == 0 {
            return Err(ConfigError::ZeroHandLimit);
        }
        if self.opening_hand > self.hand_limit {
            return Err(ConfigError::OpeningHandTooLarge {
                opening: self.opening_hand,
                limit: self.hand_limit,
            });
        }
        if self.starting_hp <= self.defeat_threshold {
            return Err(ConfigError::StartsDefeated {
                hp: self.starting_hp,
                threshold: self.defeat_threshold,
            });
        }
        Ok(())
    }

    /// Set starting hit points.
    #[must_use]
    pub fn with_starting_hp(mut self, hp: i32) -> Self {
        self.starting_hp = hp;
        self
    }

    /// Set the hand limit.
    #[must_use]
    pub fn with_hand_limit(mut self, limit: usize) -> Self {
        self.hand_limit = limit;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_opening_hand(mut self, cards: usize) -> Self {
        self.opening_hand = cards;
        self
    }

    /// Set how many lands may be played per turn.
    #[must_use]
    pub fn with_lands_per_turn(mut self, lands: u32) -> Self {
        self.lands_per_turn = lands;
        self
    }

    /// Set the defeat threshold.
    #[must_use]
    pub fn with_defeat_threshold(mut self, threshold: i32) -> Self {
        self.defeat_threshold = threshold;
        self
    }

    /// Also restore printed abilities during the upkeep stat reset.
    #[must_use]
    pub fn with_ability_reset_at_upkeep(mut self) -> Self {
        self.reset_abilities_at_upkeep = true;
        self
    }

    /// True if `hp` means the player has lost.
    #[must_use]
    pub fn is_defeated(&self, hp: i32) -> bool {
        hp <= self.defeat_threshold
    }
}
