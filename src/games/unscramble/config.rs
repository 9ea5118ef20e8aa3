use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::error::ConfigError;

/// Number of words presented in one session
pub const MAX_NO_OF_WORDS: usize = 10;
/// Points awarded for each correct guess
pub const SCORE_INCREASE: u32 = 20;

/// Session rules. Every field is optional in the JSON file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub max_words: usize,
    pub score_increase: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_words: MAX_NO_OF_WORDS,
            score_increase: SCORE_INCREASE,
        }
    }
}

impl GameConfig {
    /// Load a config from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_words == 0 {
            return Err(ConfigError::ZeroMaxWords);
        }
        Ok(())
    }
}
