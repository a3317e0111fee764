//! Headless game driver.
//!
//! Plays complete games through `GameSession` with random, rule-abiding bids
//! and trick counts: the last seat re-bids when the table total would equal
//! the cards dealt, and every trick of a hand goes to exactly one player.

use judgment_core::domain::default_roster;
use judgment_core::{
    AdvanceOutcome, DomainError, GameConfig, GameSession, GameSnapshot, PlayerId, PlayerStats,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Outcome of one simulated game.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub snapshot: GameSnapshot,
    pub stats: Vec<PlayerStats>,
    /// Times the last seat had to change a bid because of the sum rule.
    pub forced_rebids: u32,
}

impl GameResult {
    pub fn final_scores(&self) -> Vec<i32> {
        self.snapshot.players.iter().map(|p| p.total_score).collect()
    }
}

pub struct Simulator {
    rng: StdRng,
    game_id: u32,
}

impl Simulator {
    pub fn new(seed: u64, game_id: u32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            game_id,
        }
    }

    pub fn simulate_game(
        mut self,
        players: usize,
        config: GameConfig,
    ) -> Result<GameResult, DomainError> {
        let mut session = GameSession::new();
        session.start_game_with(default_roster(players), config)?;
        let ids: Vec<PlayerId> = session.players().iter().map(|p| p.id.clone()).collect();
        let mut forced_rebids = 0;

        loop {
            let hand_size = session.round_info().hand_size;

            for id in &ids {
                let bid = self.rng.random_range(0..=hand_size);
                session.record_bid(id, bid)?;
            }
            if session.bids_equal_hand_size() {
                forced_rebids += 1;
                self.rebid_last_seat(&mut session, &ids, hand_size)?;
            }
            session.confirm_bids()?;

            let mut won = vec![0u8; ids.len()];
            for _ in 0..hand_size {
                won[self.rng.random_range(0..ids.len())] += 1;
            }
            for (id, &tricks) in ids.iter().zip(&won) {
                session.record_tricks(id, tricks)?;
            }
            session.confirm_tricks()?;

            // Peek at results now and then, the way a player would.
            if self.rng.random_bool(0.1) {
                session.view_results();
                session.return_from_results();
            }

            if let AdvanceOutcome::Completed = session.advance_round()? {
                break;
            }
        }

        debug!(
            game_id = self.game_id,
            forced_rebids, "Simulated game finished"
        );

        let stats = ids
            .iter()
            .map(|id| session.player_stats(id))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GameResult {
            snapshot: session.snapshot(),
            stats,
            forced_rebids,
        })
    }

    /// Move the last seat's bid to any other legal value.
    fn rebid_last_seat(
        &mut self,
        session: &mut GameSession,
        ids: &[PlayerId],
        hand_size: u8,
    ) -> Result<(), DomainError> {
        let Some(last) = ids.last() else {
            return Ok(());
        };
        let current = session.player(last).and_then(|p| p.current_bid).unwrap_or(0);
        // hand_size >= 1, so there is always a second value to choose from.
        let mut bid = self.rng.random_range(0..hand_size);
        if bid >= current {
            bid += 1;
        }
        session.record_bid(last, bid)
    }
}
