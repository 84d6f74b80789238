//! Game configuration.
//!
//! `GameConfig` carries the few knobs a hosting application may set before
//! a game starts. Defaults describe the standard game: four seeds per pit,
//! players named "Player 1" and "Player 2".

use serde::{Deserialize, Serialize};

use super::board::{DEFAULT_SEEDS_PER_PIT, PITS_PER_SIDE};
use super::player::{PlayerId, PLAYER_COUNT};
use crate::rules::ConfigError;

/// Configuration for a new game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seeds placed in each of the twelve pits.
    pub seeds_per_pit: u32,

    /// Names offered to the front end when the players don't pick their own.
    pub default_names: [String; PLAYER_COUNT],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seeds_per_pit: DEFAULT_SEEDS_PER_PIT,
            default_names: ["Player 1".to_string(), "Player 2".to_string()],
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of seeds per pit.
    #[must_use]
    pub fn with_seeds_per_pit(mut self, seeds: u32) -> Self {
        self.seeds_per_pit = seeds;
        self
    }

    /// Set the fallback name for a player.
    #[must_use]
    pub fn with_default_name(mut self, player: PlayerId, name: impl Into<String>) -> Self {
        self.default_names[player.index()] = name.into();
        self
    }

    /// Fallback name for a player.
    #[must_use]
    pub fn default_name(&self, player: PlayerId) -> &str {
        &self.default_names[player.index()]
    }

    /// Seeds on the board for the whole game.
    ///
    /// Saturates at `u32::MAX` for configs that would fail [`Self::validate`].
    #[must_use]
    pub fn total_seeds(&self) -> u32 {
        self.seeds_per_pit
            .saturating_mul((PLAYER_COUNT * PITS_PER_SIDE) as u32)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seeds_per_pit == 0 {
            return Err(ConfigError::Invalid("seeds_per_pit must be > 0".into()));
        }
        // Keeps the board total comfortably inside u32.
        if self.seeds_per_pit > 1_000_000 {
            return Err(ConfigError::Invalid(
                "seeds_per_pit must be <= 1000000".into(),
            ));
        }
        if self.default_names.iter().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "default player names must not be blank".into(),
            ));
        }
        Ok(())
    }
}
