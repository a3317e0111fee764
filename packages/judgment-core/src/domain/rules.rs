use std::ops::RangeInclusive;

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 10;

// Hand-size schedule: 1 → 8 → 1, one round per entry.
pub const ROUND_HAND_SIZES: [u8; 15] = [1, 2, 3, 4, 5, 6, 7, 8, 7, 6, 5, 4, 3, 2, 1];
pub const TOTAL_ROUNDS: u8 = ROUND_HAND_SIZES.len() as u8;

/// Hand size for a 1-based round number, `None` outside `1..=15`.
pub fn hand_size_for_round(round_no: u8) -> Option<u8> {
    if round_no == 0 {
        return None;
    }
    ROUND_HAND_SIZES.get(usize::from(round_no - 1)).copied()
}

pub fn valid_bid_range(hand_size: u8) -> RangeInclusive<u8> {
    0..=hand_size
}

/// Whether a complete set of bids is allowed to stand.
///
/// The bids of all players may never add up to the number of cards dealt,
/// so at least one player must miss their bid.
pub fn bid_total_allowed(bid_total: u32, hand_size: u8) -> bool {
    bid_total != u32::from(hand_size)
}
