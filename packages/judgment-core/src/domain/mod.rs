//! Domain layer: pure round/scoring state machine and helpers.

pub mod bidding;
pub mod history;
pub mod lifecycle;
pub mod player_view;
pub mod players;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod tricks;
pub mod trump;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_lifecycle;
#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use history::{PlayerRoundResult, RoundResult};
pub use lifecycle::AdvanceOutcome;
pub use player_view::{leaderboard, player_stats, PlayerStats};
pub use players::{
    add_seat, default_roster, remove_seat, rename_seat, validate_roster, NewPlayer, Player,
    PlayerId, PLAYER_COLORS,
};
pub use rules::{hand_size_for_round, MAX_PLAYERS, MIN_PLAYERS, ROUND_HAND_SIZES, TOTAL_ROUNDS};
pub use scoring::{round_score, ScoringSystem};
pub use snapshot::{GameSnapshot, RoundInfo};
pub use state::{ActivePhase, GameState, Phase};
pub use trump::{Suit, TRUMP_ROTATION};
