use crate::domain::players::PlayerId;
use crate::domain::rules::{bid_total_allowed, valid_bid_range};
use crate::domain::state::{require_phase, GameState, Phase};
use crate::errors::domain::{DomainError, ValidationKind};

/// Set a player's bid for the current round. Bids can be changed freely until
/// they are confirmed.
pub fn record_bid(state: &mut GameState, who: &PlayerId, bid: u8) -> Result<(), DomainError> {
    require_phase(state, Phase::Bidding, "record a bid")?;
    let idx = state.player_index(who)?;
    let hand_size = state.hand_size();
    if state.config.enforce_hand_size_range && !valid_bid_range(hand_size).contains(&bid) {
        return Err(DomainError::validation(
            ValidationKind::BidOutOfRange,
            format!("bid {bid} is outside 0..={hand_size}"),
        ));
    }
    state.players[idx].current_bid = Some(bid);
    Ok(())
}

/// Lock in the bids and move on to trick entry.
pub fn confirm_bids(state: &mut GameState) -> Result<(), DomainError> {
    require_phase(state, Phase::Bidding, "confirm bids")?;
    if let Some(missing) = state.players.iter().find(|p| p.current_bid.is_none()) {
        return Err(DomainError::validation(
            ValidationKind::BidsIncomplete,
            format!("{} has not bid yet", missing.name),
        ));
    }
    let total = bid_total(state);
    let hand_size = state.hand_size();
    if !bid_total_allowed(total, hand_size) {
        return Err(DomainError::validation(
            ValidationKind::BidSumEqualsHandSize,
            format!("total bids cannot equal cards dealt ({total} == {hand_size})"),
        ));
    }
    state.phase = Phase::Tricks;
    Ok(())
}

/// Sum of entered bids; missing bids count as zero.
pub fn bid_total(state: &GameState) -> u32 {
    state
        .players
        .iter()
        .map(|p| u32::from(p.current_bid.unwrap_or(0)))
        .sum()
}

pub fn all_bids_entered(state: &GameState) -> bool {
    !state.players.is_empty() && state.players.iter().all(|p| p.current_bid.is_some())
}

/// Live feedback: the running bid total currently equals the cards dealt.
pub fn bids_equal_hand_size(state: &GameState) -> bool {
    !bid_total_allowed(bid_total(state), state.hand_size())
}

pub fn can_confirm_bids(state: &GameState) -> bool {
    state.phase == Phase::Bidding && all_bids_entered(state) && !bids_equal_hand_size(state)
}
