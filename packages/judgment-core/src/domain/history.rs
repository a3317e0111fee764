//! Immutable per-round records appended when a round is advanced.

use serde::{Deserialize, Serialize};

use crate::domain::players::{Player, PlayerId};
use crate::domain::trump::Suit;

/// One player's line in a round record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRoundResult {
    pub player_id: PlayerId,
    pub name: String,
    pub color: String,
    pub bid: Option<u8>,
    pub tricks: Option<u8>,
    pub round_score: i32,
    pub total_score_after: i32,
}

impl PlayerRoundResult {
    pub fn capture(p: &Player) -> Self {
        Self {
            player_id: p.id.clone(),
            name: p.name.clone(),
            color: p.color.clone(),
            bid: p.current_bid,
            tricks: p.current_tricks,
            round_score: p.round_score.unwrap_or(0),
            total_score_after: p.total_after_round(),
        }
    }

    /// Bid and tricks both present and equal.
    pub fn exact(&self) -> bool {
        matches!((self.bid, self.tricks), (Some(b), Some(t)) if b == t)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round_no: u8,
    pub hand_size: u8,
    pub trump: Suit,
    /// Seat order.
    pub results: Vec<PlayerRoundResult>,
}

impl RoundResult {
    pub fn for_player(&self, id: &PlayerId) -> Option<&PlayerRoundResult> {
        self.results.iter().find(|r| &r.player_id == id)
    }
}
