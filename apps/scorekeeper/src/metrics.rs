//! Metrics collection and output for simulated games.

use judgment_core::{leaderboard, PlayerStats, RoundResult, ScoringSystem};
use serde::Serialize;

use crate::simulator::GameResult;

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: GameConfigMetrics,
    pub result: GameResultMetrics,
    pub rounds: Vec<RoundMetrics>,
    pub player_metrics: Vec<PlayerMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameConfigMetrics {
    pub players: usize,
    pub scoring: ScoringSystem,
    pub total_games: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub final_scores: Vec<i32>,
    pub winner: String,
    pub winning_score: i32,
    pub forced_rebids: u32,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: u8,
    pub hand_size: u8,
    pub trump: String,
    pub bids: Vec<Option<u8>>,
    pub tricks: Vec<Option<u8>>,
    pub scores: Vec<i32>,
    pub bid_total: u32,
    pub exact_bids: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMetrics {
    pub seat: usize,
    pub name: String,
    pub total_score: i32,
    pub successful_bids: u32,
    pub success_pct: u32,
    pub avg_points_per_round: i32,
    pub overbids: u32,  // bid exceeded tricks
    pub underbids: u32, // tricks exceeded bid
}

/// Flat per-game row for the CSV summary.
#[derive(Debug, Clone, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub players: usize,
    pub scoring: String,
    pub winner: String,
    pub winning_score: i32,
    pub lowest_score: i32,
    pub forced_rebids: u32,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(m: &GameMetrics) -> Self {
        Self {
            game_id: m.game_id,
            seed: m.seed,
            players: m.config.players,
            scoring: m.config.scoring.to_string(),
            winner: m.result.winner.clone(),
            winning_score: m.result.winning_score,
            lowest_score: m.result.final_scores.iter().copied().min().unwrap_or(0),
            forced_rebids: m.result.forced_rebids,
        }
    }
}

/// Build metrics from a finished game.
pub fn build_game_metrics(
    game_id: u32,
    seed: u64,
    total_games: u32,
    result: &GameResult,
    duration_ms: f64,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let snapshot = &result.snapshot;
    let rounds = snapshot.rounds_history.iter().map(build_round_metrics).collect();

    let player_metrics = snapshot
        .players
        .iter()
        .zip(&result.stats)
        .enumerate()
        .map(|(seat, (player, stats))| {
            build_player_metrics(
                seat,
                &player.name,
                player.total_score,
                stats,
                &snapshot.rounds_history,
            )
        })
        .collect();

    let (winner, winning_score) = leaderboard(&snapshot.players)
        .first()
        .map(|p| (p.name.clone(), p.total_score))
        .unwrap_or_default();

    GameMetrics {
        game_id,
        seed,
        timestamp,
        config: GameConfigMetrics {
            players: snapshot.players.len(),
            scoring: snapshot.config.scoring,
            total_games,
        },
        result: GameResultMetrics {
            final_scores: result.final_scores(),
            winner,
            winning_score,
            forced_rebids: result.forced_rebids,
            duration_ms,
        },
        rounds,
        player_metrics,
    }
}

fn build_round_metrics(round: &RoundResult) -> RoundMetrics {
    RoundMetrics {
        round_no: round.round_no,
        hand_size: round.hand_size,
        trump: round.trump.to_string(),
        bids: round.results.iter().map(|r| r.bid).collect(),
        tricks: round.results.iter().map(|r| r.tricks).collect(),
        scores: round.results.iter().map(|r| r.round_score).collect(),
        bid_total: round
            .results
            .iter()
            .map(|r| u32::from(r.bid.unwrap_or(0)))
            .sum(),
        exact_bids: round.results.iter().filter(|r| r.exact()).count() as u32,
    }
}

fn build_player_metrics(
    seat: usize,
    name: &str,
    total_score: i32,
    stats: &PlayerStats,
    history: &[RoundResult],
) -> PlayerMetrics {
    let mut overbids = 0;
    let mut underbids = 0;
    for line in history.iter().filter_map(|r| r.for_player(&stats.player_id)) {
        if let (Some(bid), Some(tricks)) = (line.bid, line.tricks) {
            if bid > tricks {
                overbids += 1;
            } else if tricks > bid {
                underbids += 1;
            }
        }
    }

    PlayerMetrics {
        seat,
        name: name.to_string(),
        total_score,
        successful_bids: stats.successful_bids,
        success_pct: stats.success_pct,
        avg_points_per_round: stats.avg_points_per_round,
        overbids,
        underbids,
    }
}
