// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::rules::{MAX_PLAYERS, MIN_PLAYERS, TOTAL_ROUNDS};
use crate::domain::scoring::ScoringSystem;
use crate::domain::trump::Suit;

pub fn scoring_system() -> impl Strategy<Value = ScoringSystem> {
    prop_oneof![Just(ScoringSystem::Standard), Just(ScoringSystem::Multiplier)]
}

pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Spades),
        Just(Suit::Diamonds),
        Just(Suit::Clubs),
        Just(Suit::Hearts),
    ]
}

pub fn player_count() -> impl Strategy<Value = usize> {
    MIN_PLAYERS..=MAX_PLAYERS
}

pub fn round_no() -> impl Strategy<Value = u8> {
    1..=TOTAL_ROUNDS
}

/// A full game's worth of raw per-round entries: for each of the 15 rounds,
/// one `(bid_seed, tricks_seed)` per seat. Seeds are reduced modulo
/// `hand_size + 1` by the caller.
pub fn game_entries(players: usize) -> impl Strategy<Value = Vec<Vec<(u8, u8)>>> {
    prop::collection::vec(
        prop::collection::vec((any::<u8>(), any::<u8>()), players),
        usize::from(TOTAL_ROUNDS),
    )
}
