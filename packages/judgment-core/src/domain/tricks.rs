use crate::domain::players::PlayerId;
use crate::domain::rules::valid_bid_range;
use crate::domain::scoring::round_score;
use crate::domain::state::{require_phase, GameState, Phase};
use crate::errors::domain::{DomainError, ValidationKind};

/// Set tricks won for a player and rescore them.
///
/// The round score is only derived when the player has a bid; otherwise it
/// stays unset.
pub fn record_tricks(state: &mut GameState, who: &PlayerId, tricks: u8) -> Result<(), DomainError> {
    require_phase(state, Phase::Tricks, "record tricks")?;
    let idx = state.player_index(who)?;
    let hand_size = state.hand_size();
    if state.config.enforce_hand_size_range && !valid_bid_range(hand_size).contains(&tricks) {
        return Err(DomainError::validation(
            ValidationKind::TricksOutOfRange,
            format!("{tricks} tricks is outside 0..={hand_size}"),
        ));
    }
    let scoring = state.config.scoring;
    let player = &mut state.players[idx];
    player.current_tricks = Some(tricks);
    player.round_score = player.current_bid.map(|bid| round_score(bid, tricks, scoring));
    Ok(())
}

/// Lock in the trick counts and show the round's scores.
pub fn confirm_tricks(state: &mut GameState) -> Result<(), DomainError> {
    require_phase(state, Phase::Tricks, "confirm tricks")?;
    if let Some(missing) = state.players.iter().find(|p| p.current_tricks.is_none()) {
        return Err(DomainError::validation(
            ValidationKind::TricksIncomplete,
            format!("{} has no trick count yet", missing.name),
        ));
    }
    let hand_size = state.hand_size();
    let total = trick_total(state);
    if state.config.enforce_trick_total && total != u32::from(hand_size) {
        return Err(DomainError::validation(
            ValidationKind::TrickSumMismatch,
            format!("tricks add up to {total}, but {hand_size} cards were dealt"),
        ));
    }
    state.phase = Phase::Scores;
    Ok(())
}

/// Go back from trick entry to bidding. Bids are kept; trick counts and
/// round scores are discarded since they depend on the bids.
pub fn reopen_bids(state: &mut GameState) -> Result<(), DomainError> {
    require_phase(state, Phase::Tricks, "reopen bids")?;
    for p in &mut state.players {
        p.current_tricks = None;
        p.round_score = None;
    }
    state.phase = Phase::Bidding;
    Ok(())
}

/// Sum of entered trick counts; missing counts are zero.
pub fn trick_total(state: &GameState) -> u32 {
    state
        .players
        .iter()
        .map(|p| u32::from(p.current_tricks.unwrap_or(0)))
        .sum()
}

pub fn all_tricks_entered(state: &GameState) -> bool {
    !state.players.is_empty() && state.players.iter().all(|p| p.current_tricks.is_some())
}

pub fn can_confirm_tricks(state: &GameState) -> bool {
    state.phase == Phase::Tricks
        && all_tricks_entered(state)
        && (!state.config.enforce_trick_total
            || trick_total(state) == u32::from(state.hand_size()))
}
