//! Error codes surfaced to presentation layers.
//!
//! All error codes are SCREAMING_SNAKE_CASE. Add new codes here; never pass
//! ad-hoc strings as error codes.

use core::fmt;

/// Centralized error codes for the scoring engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Setup
    /// Roster has fewer than 3 or more than 10 players
    InvalidPlayerCount,
    /// A player name is empty after trimming
    EmptyPlayerName,
    /// Two roster entries share an id
    DuplicatePlayer,
    /// Player id is not part of the session
    UnknownPlayer,

    // Round entry
    /// Not every player has a bid
    BidsIncomplete,
    /// Bids add up to the number of cards dealt
    BidSumEqualsHandSize,
    /// Not every player has a trick count
    TricksIncomplete,
    /// Bid outside 0..=hand size
    InvalidBid,
    /// Trick count outside 0..=hand size
    InvalidTricks,
    /// Tricks do not add up to the number of cards dealt
    TrickSumMismatch,

    // Lifecycle
    /// All rounds have been played
    GameComplete,
    /// Operation not allowed in the current phase
    PhaseMismatch,

    // Parsing
    /// Text could not be parsed into a domain value
    ParseError,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::EmptyPlayerName => "EMPTY_PLAYER_NAME",
            Self::DuplicatePlayer => "DUPLICATE_PLAYER",
            Self::UnknownPlayer => "UNKNOWN_PLAYER",
            Self::BidsIncomplete => "BIDS_INCOMPLETE",
            Self::BidSumEqualsHandSize => "BID_SUM_EQUALS_HAND_SIZE",
            Self::TricksIncomplete => "TRICKS_INCOMPLETE",
            Self::InvalidBid => "INVALID_BID",
            Self::InvalidTricks => "INVALID_TRICKS",
            Self::TrickSumMismatch => "TRICK_SUM_MISMATCH",
            Self::GameComplete => "GAME_COMPLETE",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::ParseError => "PARSE_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
