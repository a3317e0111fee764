//! Public snapshot API for re-rendering after every operation.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::domain::history::RoundResult;
use crate::domain::players::Player;
use crate::domain::rules::hand_size_for_round;
use crate::domain::state::{GameState, Phase};
use crate::domain::trump::Suit;

/// Round descriptor derived from the round counter and current trump.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundInfo {
    pub round_no: u8,
    pub hand_size: u8,
    pub trump: Suit,
    pub total_rounds: u8,
}

impl RoundInfo {
    pub fn of(state: &GameState) -> Self {
        Self {
            round_no: state.current_round,
            hand_size: hand_size_for_round(state.current_round).unwrap_or(0),
            trump: state.trump,
            total_rounds: state.total_rounds(),
        }
    }
}

/// Owned copy of the whole session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub config: GameConfig,
    pub round: RoundInfo,
    pub players: Vec<Player>,
    pub rounds_history: Vec<RoundResult>,
    pub is_complete: bool,
}

impl GameSnapshot {
    pub fn of(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            config: state.config,
            round: RoundInfo::of(state),
            players: state.players.clone(),
            rounds_history: state.history.clone(),
            is_complete: state.complete,
        }
    }
}
