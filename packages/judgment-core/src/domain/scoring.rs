use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// How an exact bid is rewarded.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringSystem {
    /// 10 + bid for an exact bid.
    #[default]
    Standard,
    /// "Add a zero" to the bid: 0 → 10, 1 → 11, n → 10n.
    Multiplier,
}

impl ScoringSystem {
    pub fn label(self) -> &'static str {
        match self {
            ScoringSystem::Standard => "Standard Scoring",
            ScoringSystem::Multiplier => "Multiplier Scoring",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ScoringSystem::Standard => "10 + bid amount for exact bids",
            ScoringSystem::Multiplier => "Add \"0\" to bid (1→11, 0→10)",
        }
    }
}

impl fmt::Display for ScoringSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringSystem::Standard => f.write_str("standard"),
            ScoringSystem::Multiplier => f.write_str("multiplier"),
        }
    }
}

impl FromStr for ScoringSystem {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(ScoringSystem::Standard),
            "multiplier" => Ok(ScoringSystem::Multiplier),
            other => Err(DomainError::validation(
                ValidationKind::ParseScoringSystem,
                format!("unknown scoring system '{other}'"),
            )),
        }
    }
}

/// Points earned for one round.
///
/// A missed bid scores nothing. Range checks on `bid` and `tricks` are the
/// caller's job.
pub fn round_score(bid: u8, tricks: u8, system: ScoringSystem) -> i32 {
    if bid != tricks {
        return 0;
    }
    let bid = i32::from(bid);
    match system {
        ScoringSystem::Standard => 10 + bid,
        // 1 is "11", not "10": the multiplier table is irregular below 2.
        ScoringSystem::Multiplier => match bid {
            0 => 10,
            1 => 11,
            n => n * 10,
        },
    }
}

/// Whether a round counts as a made bid for statistics.
pub fn bid_made(bid: u8, tricks: u8, score: i32) -> bool {
    bid == tricks && score > 0
}
