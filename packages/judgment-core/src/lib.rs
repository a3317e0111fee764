#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Round and scoring engine for Kachuphool / Judgment score keeping.
//!
//! Fifteen rounds with hand sizes 1 → 8 → 1, a rotating trump suit, and a
//! bid-sum rule that guarantees somebody misses each round.

pub mod config;
pub mod domain;
pub mod errors;
pub mod session;

// Re-exports for public API
pub use config::{ConfigError, GameConfig};
pub use domain::{
    hand_size_for_round, leaderboard, player_stats, round_score, ActivePhase, AdvanceOutcome,
    GameSnapshot, GameState, NewPlayer, Phase, Player, PlayerId, PlayerRoundResult, PlayerStats,
    RoundInfo, RoundResult, ScoringSystem, Suit, MAX_PLAYERS, MIN_PLAYERS, TOTAL_ROUNDS,
};
pub use errors::{DomainError, ErrorCode, ValidationKind};
pub use session::GameSession;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_support::logging::init();
}
