//! Rule configuration for a game session.

use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::scoring::ScoringSystem;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration error: {name} has invalid value '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

/// Rules chosen when a game starts. Fixed for the lifetime of the game.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub scoring: ScoringSystem,
    /// Reject bids and trick counts above the current hand size.
    pub enforce_hand_size_range: bool,
    /// Require the trick counts of a round to add up to the hand size.
    pub enforce_trick_total: bool,
}

impl GameConfig {
    pub fn with_scoring(scoring: ScoringSystem) -> Self {
        Self {
            scoring,
            ..Self::default()
        }
    }

    /// Build a config from `JUDGMENT_*` environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
        let scoring = match lookup("JUDGMENT_SCORING") {
            Some(value) => value
                .parse::<ScoringSystem>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "JUDGMENT_SCORING",
                    value,
                })?,
            None => ScoringSystem::default(),
        };
        Ok(Self {
            scoring,
            enforce_hand_size_range: flag(&lookup, "JUDGMENT_ENFORCE_RANGE")?,
            enforce_trick_total: flag(&lookup, "JUDGMENT_ENFORCE_TRICK_TOTAL")?,
        })
    }
}

/// Boolean environment flag, off when unset.
fn flag(
    lookup: &impl Fn(&'static str) -> Option<String>,
    name: &'static str,
) -> Result<bool, ConfigError> {
    let Some(value) = lookup(name) else {
        return Ok(false);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue { name, value }),
    }
}
