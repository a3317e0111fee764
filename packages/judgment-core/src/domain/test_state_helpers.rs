//! Test-only game state builders for domain unit tests.

use crate::config::GameConfig;
use crate::domain::lifecycle::start_game;
use crate::domain::players::{NewPlayer, PlayerId};
use crate::domain::scoring::ScoringSystem;
use crate::domain::state::{GameState, Phase};

/// Ids `p0..pN` with names `Player 1..N`.
pub fn roster(n: usize) -> Vec<NewPlayer> {
    (0..n)
        .map(|i| NewPlayer::new(format!("p{i}").as_str(), format!("Player {}", i + 1), "#000"))
        .collect()
}

pub fn pid(i: usize) -> PlayerId {
    PlayerId::new(format!("p{i}"))
}

/// Fresh game in round 1 bidding.
pub fn started(n: usize, scoring: ScoringSystem) -> GameState {
    started_with(n, GameConfig::with_scoring(scoring))
}

pub fn started_with(n: usize, config: GameConfig) -> GameState {
    let mut state = GameState::setup();
    start_game(&mut state, roster(n), config).expect("valid roster");
    state
}

/// Jump a started game to the given round and phase with no entries.
pub fn at_round(mut state: GameState, round_no: u8, phase: Phase) -> GameState {
    state.current_round = round_no;
    state.phase = phase;
    state
}

/// Write bids directly, bypassing phase checks.
pub fn set_bids(state: &mut GameState, bids: &[u8]) {
    for (p, &b) in state.players.iter_mut().zip(bids) {
        p.current_bid = Some(b);
    }
}
