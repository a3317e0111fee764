//! Game start, round advancement, trump rotation, results view and reset.

use crate::config::GameConfig;
use crate::domain::history::{PlayerRoundResult, RoundResult};
use crate::domain::players::{validate_roster, NewPlayer, Player};
use crate::domain::state::{active_phase, require_phase, GameState, Phase};
use crate::domain::trump::TRUMP_ROTATION;
use crate::errors::domain::{DomainError, ValidationKind};

/// What `advance_round` did after committing the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// A new round started in Bidding.
    NextRound { round_no: u8 },
    /// The final round was committed; the game is over.
    Completed,
}

/// Seat the roster and begin round 1.
pub fn start_game(
    state: &mut GameState,
    players: Vec<NewPlayer>,
    config: GameConfig,
) -> Result<(), DomainError> {
    require_phase(state, Phase::Setup, "start a game")?;
    validate_roster(&players)?;
    *state = GameState {
        phase: Phase::Bidding,
        config,
        players: players.into_iter().map(Player::from_new).collect(),
        current_round: 1,
        trump: TRUMP_ROTATION[0],
        history: Vec::new(),
        complete: false,
    };
    Ok(())
}

/// Record the round in history, commit scores, and move to the next round.
pub fn advance_round(state: &mut GameState) -> Result<AdvanceOutcome, DomainError> {
    require_phase(state, Phase::Scores, "advance the round")?;
    if state.complete {
        return Err(DomainError::validation(
            ValidationKind::GameComplete,
            format!("all {} rounds have been played", state.total_rounds()),
        ));
    }

    let record = RoundResult {
        round_no: state.current_round,
        hand_size: state.hand_size(),
        trump: state.trump,
        results: state.players.iter().map(PlayerRoundResult::capture).collect(),
    };
    state.history.push(record);

    for p in &mut state.players {
        p.total_score = p.total_after_round();
        p.clear_round();
    }

    if state.current_round < state.total_rounds() {
        state.current_round += 1;
        state.trump = state.trump.next();
        state.phase = Phase::Bidding;
        Ok(AdvanceOutcome::NextRound {
            round_no: state.current_round,
        })
    } else {
        state.complete = true;
        state.phase = Phase::Scores;
        Ok(AdvanceOutcome::Completed)
    }
}

/// Move trump one step along the rotation without touching the round.
pub fn next_trump(state: &mut GameState) -> Result<(), DomainError> {
    if active_phase(state.phase).is_none() {
        return Err(DomainError::invalid_transition("change trump", state.phase));
    }
    state.trump = state.trump.next();
    Ok(())
}

/// Open the read-only results view. Outside Bidding, Tricks and Scores this
/// is a no-op.
pub fn view_results(state: &mut GameState) {
    if let Some(return_to) = active_phase(state.phase) {
        state.phase = Phase::Results { return_to };
    }
}

/// Leave the results view for the phase it was opened from. No-op when the
/// view is not open.
pub fn return_from_results(state: &mut GameState) {
    if let Phase::Results { return_to } = state.phase {
        state.phase = return_to.into();
    }
}

/// Discard everything and go back to setup.
pub fn reset_game(state: &mut GameState) {
    *state = GameState::setup();
}
