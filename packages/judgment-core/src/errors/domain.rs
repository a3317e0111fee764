//! Domain-level error type returned by every engine operation.
//!
//! Errors are local and recoverable: the engine refuses the operation and
//! leaves the session exactly as it was before the call.

use thiserror::Error;

use crate::domain::state::Phase;
use crate::errors::error_code::ErrorCode;

/// Validation failure kinds (extend as needed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    TooFewPlayers,
    TooManyPlayers,
    EmptyName,
    DuplicatePlayerId,
    UnknownPlayer,
    BidsIncomplete,
    BidSumEqualsHandSize,
    TricksIncomplete,
    BidOutOfRange,
    TricksOutOfRange,
    TrickSumMismatch,
    GameComplete,
    ParseSuit,
    ParseScoringSystem,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Precondition or business rule violation
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Operation is not permitted in the current phase
    #[error("cannot {action} during {phase}")]
    InvalidTransition { action: &'static str, phase: Phase },
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn invalid_transition(action: &'static str, phase: Phase) -> Self {
        Self::InvalidTransition { action, phase }
    }

    /// Validation kind, if this is a validation failure.
    pub fn kind(&self) -> Option<ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(*kind),
            DomainError::InvalidTransition { .. } => None,
        }
    }

    /// Stable code for presentation layers.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::TooFewPlayers | ValidationKind::TooManyPlayers => {
                    ErrorCode::InvalidPlayerCount
                }
                ValidationKind::EmptyName => ErrorCode::EmptyPlayerName,
                ValidationKind::DuplicatePlayerId => ErrorCode::DuplicatePlayer,
                ValidationKind::UnknownPlayer => ErrorCode::UnknownPlayer,
                ValidationKind::BidsIncomplete => ErrorCode::BidsIncomplete,
                ValidationKind::BidSumEqualsHandSize => ErrorCode::BidSumEqualsHandSize,
                ValidationKind::TricksIncomplete => ErrorCode::TricksIncomplete,
                ValidationKind::BidOutOfRange => ErrorCode::InvalidBid,
                ValidationKind::TricksOutOfRange => ErrorCode::InvalidTricks,
                ValidationKind::TrickSumMismatch => ErrorCode::TrickSumMismatch,
                ValidationKind::GameComplete => ErrorCode::GameComplete,
                ValidationKind::ParseSuit | ValidationKind::ParseScoringSystem => {
                    ErrorCode::ParseError
                }
            },
            DomainError::InvalidTransition { .. } => ErrorCode::PhaseMismatch,
        }
    }
}
