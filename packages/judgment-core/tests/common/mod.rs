#![allow(dead_code)]

use judgment_core::{GameSession, NewPlayer, PlayerId, ScoringSystem};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    test_support::logging::init();
}

pub fn roster(names: &[&str]) -> Vec<NewPlayer> {
    names
        .iter()
        .enumerate()
        .map(|(seat, name)| NewPlayer::for_seat(seat, *name))
        .collect()
}

pub fn ids(session: &GameSession) -> Vec<PlayerId> {
    session.players().iter().map(|p| p.id.clone()).collect()
}

pub fn started(names: &[&str], scoring: ScoringSystem) -> GameSession {
    let mut session = GameSession::new();
    session
        .start_game(roster(names), scoring)
        .expect("roster should be valid");
    session
}

/// Enter bids and tricks for the current round, confirm both, and advance.
pub fn play_round(session: &mut GameSession, bids: &[u8], tricks: &[u8]) {
    let ids = ids(session);
    for (id, &b) in ids.iter().zip(bids) {
        session.record_bid(id, b).expect("bid accepted");
    }
    session.confirm_bids().expect("bids confirmed");
    for (id, &t) in ids.iter().zip(tricks) {
        session.record_tricks(id, t).expect("tricks accepted");
    }
    session.confirm_tricks().expect("tricks confirmed");
    session.advance_round().expect("round advanced");
}
