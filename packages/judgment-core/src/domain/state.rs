use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::domain::history::RoundResult;
use crate::domain::players::{Player, PlayerId};
use crate::domain::rules::{hand_size_for_round, TOTAL_ROUNDS};
use crate::domain::trump::{Suit, TRUMP_ROTATION};
use crate::errors::domain::{DomainError, ValidationKind};

/// Phases a results view can be opened from.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivePhase {
    Bidding,
    Tricks,
    Scores,
}

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Phase {
    /// No game yet; roster is being assembled.
    Setup,
    /// Players enter bids for the current round.
    Bidding,
    /// Players enter tricks won for the current round.
    Tricks,
    /// Round scores are shown; the final round stays here once complete.
    Scores,
    /// Read-only results view; leaving it restores `return_to`.
    Results { return_to: ActivePhase },
}

impl From<ActivePhase> for Phase {
    fn from(p: ActivePhase) -> Self {
        match p {
            ActivePhase::Bidding => Phase::Bidding,
            ActivePhase::Tricks => Phase::Tricks,
            ActivePhase::Scores => Phase::Scores,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Setup => f.write_str("setup"),
            Phase::Bidding => f.write_str("bidding"),
            Phase::Tricks => f.write_str("tricks"),
            Phase::Scores => f.write_str("scores"),
            Phase::Results { .. } => f.write_str("results"),
        }
    }
}

/// Entire session container, sufficient for pure domain operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub phase: Phase,
    /// Rules fixed at game start.
    pub config: GameConfig,
    /// Seat order; fixed once the game starts.
    pub players: Vec<Player>,
    /// Round number (1..=15); meaningless in Setup.
    pub current_round: u8,
    pub trump: Suit,
    /// Append-only; one entry per advanced round.
    pub history: Vec<RoundResult>,
    /// Set once the final round has been advanced.
    pub complete: bool,
}

impl GameState {
    /// Pre-game state: no players, round 1, first trump.
    pub fn setup() -> Self {
        Self {
            phase: Phase::Setup,
            config: GameConfig::default(),
            players: Vec::new(),
            current_round: 1,
            trump: TRUMP_ROTATION[0],
            history: Vec::new(),
            complete: false,
        }
    }

    pub fn total_rounds(&self) -> u8 {
        TOTAL_ROUNDS
    }

    /// Hand size for the current round.
    pub fn hand_size(&self) -> u8 {
        hand_size_for_round(self.current_round).unwrap_or(0)
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    pub fn player_index(&self, id: &PlayerId) -> Result<usize, DomainError> {
        self.players.iter().position(|p| &p.id == id).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::UnknownPlayer,
                format!("no player with id '{id}' in this game"),
            )
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::setup()
    }
}

pub fn require_phase(
    state: &GameState,
    expected: Phase,
    action: &'static str,
) -> Result<(), DomainError> {
    if state.phase == expected {
        Ok(())
    } else {
        Err(DomainError::invalid_transition(action, state.phase))
    }
}

/// The phase a results view may be opened from, if any.
pub fn active_phase(phase: Phase) -> Option<ActivePhase> {
    match phase {
        Phase::Bidding => Some(ActivePhase::Bidding),
        Phase::Tricks => Some(ActivePhase::Tricks),
        Phase::Scores => Some(ActivePhase::Scores),
        Phase::Setup | Phase::Results { .. } => None,
    }
}
