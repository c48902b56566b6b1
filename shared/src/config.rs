use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::constants::*;
use crate::validation::validate_player_range;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config out of range: {0}")]
    Invalid(#[from] ValidationErrors),
}

/// Tunable rules for a session. Every field falls back to the house default
/// when missing from an override.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_player_range"))]
pub struct GameConfig {
    #[validate(range(min = 0, max = 100_000))]
    pub vowel_cost: i32,
    #[validate(range(min = 0, max = 1_000))]
    pub starting_guess_budget: i32,
    #[validate(range(min = 0, max = 100_000))]
    pub bonus_per_guess: i32,
    #[validate(range(min = 0, max = 10_000))]
    pub reward_per_letter: i32,
    #[validate(range(min = 1, max = 8))]
    pub min_players: usize,
    #[validate(range(min = 1, max = 8))]
    pub max_players: usize,
    pub phrases: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            vowel_cost: VOWEL_COST,
            starting_guess_budget: STARTING_GUESS_BUDGET,
            bonus_per_guess: BONUS_PER_GUESS,
            reward_per_letter: REWARD_PER_LETTER,
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
            phrases: PHRASES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl GameConfig {
    /// Parses a (possibly partial) JSON override. Phrases are lowercased and
    /// blank entries dropped; an override that leaves no phrases keeps the
    /// default list. Money and player fields must be in range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut config: GameConfig = serde_json::from_str(raw)?;
        config.validate()?;
        config.phrases = config
            .phrases
            .iter()
            .map(|p| p.trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        if config.phrases.is_empty() {
            log::warn!("Config override has no phrases, using the default list");
            config.phrases = GameConfig::default().phrases;
        }
        Ok(config)
    }
}
