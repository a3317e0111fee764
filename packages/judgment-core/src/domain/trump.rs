//! Trump suits and the fixed trump rotation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Spades,
    Diamonds,
    Clubs,
    Hearts,
}

/// Trump order; round 1 uses the first entry and each advance moves one step.
pub const TRUMP_ROTATION: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts];

impl Suit {
    /// Position of this suit in [`TRUMP_ROTATION`].
    pub fn rotation_index(self) -> usize {
        match self {
            Suit::Spades => 0,
            Suit::Diamonds => 1,
            Suit::Clubs => 2,
            Suit::Hearts => 3,
        }
    }

    /// The suit that follows this one in the rotation, wrapping around.
    pub fn next(self) -> Suit {
        TRUMP_ROTATION[(self.rotation_index() + 1) % TRUMP_ROTATION.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Spades => "spades",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Hearts => "hearts",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Hearts => '♥',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spades" | "s" | "♠" => Ok(Suit::Spades),
            "diamonds" | "d" | "♦" => Ok(Suit::Diamonds),
            "clubs" | "c" | "♣" => Ok(Suit::Clubs),
            "hearts" | "h" | "♥" => Ok(Suit::Hearts),
            other => Err(DomainError::validation(
                ValidationKind::ParseSuit,
                format!("unknown suit '{other}'"),
            )),
        }
    }
}
