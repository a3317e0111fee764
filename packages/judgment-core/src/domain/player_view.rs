//! Derived read-only views: standings and per-player statistics.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::domain::history::RoundResult;
use crate::domain::players::{Player, PlayerId};
use crate::domain::scoring::bid_made;

/// Players ordered by total score, highest first. Ties keep seat order.
pub fn leaderboard(players: &[Player]) -> Vec<&Player> {
    let mut sorted: Vec<&Player> = players.iter().collect();
    sorted.sort_by_key(|p| Reverse(p.total_score));
    sorted
}

/// Bidding record of one player, computed from round history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub player_id: PlayerId,
    /// Rounds where the bid was met exactly.
    pub successful_bids: u32,
    /// Rounds the player appears in.
    pub total_rounds: u32,
    /// `successful_bids / total_rounds`, 0.0 with no rounds.
    pub success_rate: f64,
    pub average_round_score: f64,
    /// Success rate as a whole percentage.
    pub success_pct: u32,
    /// Average round score rounded to a whole number.
    pub avg_points_per_round: i32,
}

pub fn player_stats(history: &[RoundResult], id: &PlayerId) -> PlayerStats {
    let mut successful_bids = 0u32;
    let mut total_rounds = 0u32;
    let mut points = 0i64;

    for line in history.iter().filter_map(|round| round.for_player(id)) {
        total_rounds += 1;
        points += i64::from(line.round_score);
        if let (Some(bid), Some(tricks)) = (line.bid, line.tricks) {
            if bid_made(bid, tricks, line.round_score) {
                successful_bids += 1;
            }
        }
    }

    let (success_rate, average_round_score) = if total_rounds > 0 {
        (
            f64::from(successful_bids) / f64::from(total_rounds),
            points as f64 / f64::from(total_rounds),
        )
    } else {
        (0.0, 0.0)
    };

    PlayerStats {
        player_id: id.clone(),
        successful_bids,
        total_rounds,
        success_rate,
        average_round_score,
        success_pct: (success_rate * 100.0).round() as u32,
        avg_points_per_round: average_round_score.round() as i32,
    }
}
