//! `GameSession`: the owned engine handle a presentation layer drives.
//!
//! Every method is an atomic transition over the pure domain functions. A
//! rejected call returns the error and leaves the session untouched.

use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::domain::history::RoundResult;
use crate::domain::lifecycle::AdvanceOutcome;
use crate::domain::player_view::PlayerStats;
use crate::domain::players::{NewPlayer, Player, PlayerId};
use crate::domain::scoring::ScoringSystem;
use crate::domain::snapshot::{GameSnapshot, RoundInfo};
use crate::domain::state::{GameState, Phase};
use crate::domain::trump::Suit;
use crate::domain::{bidding, lifecycle, player_view, players, rules, tricks};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSession {
    state: GameState,
}

fn rejected<T>(action: &'static str, res: Result<T, DomainError>) -> Result<T, DomainError> {
    if let Err(e) = &res {
        warn!(action, code = %e.code(), error = %e, "Operation rejected");
    }
    res
}

impl GameSession {
    /// Session in setup, waiting for a roster.
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------------------------------------------------
    // Transitions
    // ---------------------------------------------------------------------

    pub fn start_game(
        &mut self,
        players: Vec<NewPlayer>,
        scoring: ScoringSystem,
    ) -> Result<(), DomainError> {
        self.start_game_with(players, GameConfig::with_scoring(scoring))
    }

    pub fn start_game_with(
        &mut self,
        players: Vec<NewPlayer>,
        config: GameConfig,
    ) -> Result<(), DomainError> {
        let player_count = players.len();
        rejected(
            "start_game",
            lifecycle::start_game(&mut self.state, players, config),
        )?;
        info!(
            players = player_count,
            scoring = %config.scoring,
            "Game started"
        );
        debug!(round = 1, trump = %self.state.trump, "Transition: Setup -> Bidding");
        Ok(())
    }

    pub fn record_bid(&mut self, who: &PlayerId, bid: u8) -> Result<(), DomainError> {
        rejected("record_bid", bidding::record_bid(&mut self.state, who, bid))?;
        debug!(player = %who, bid, "Bid recorded");
        Ok(())
    }

    pub fn confirm_bids(&mut self) -> Result<(), DomainError> {
        rejected("confirm_bids", bidding::confirm_bids(&mut self.state))?;
        debug!(
            round = self.state.current_round,
            bid_total = bidding::bid_total(&self.state),
            "Transition: Bidding -> Tricks"
        );
        Ok(())
    }

    pub fn record_tricks(&mut self, who: &PlayerId, won: u8) -> Result<(), DomainError> {
        rejected(
            "record_tricks",
            tricks::record_tricks(&mut self.state, who, won),
        )?;
        debug!(player = %who, tricks = won, "Tricks recorded");
        Ok(())
    }

    pub fn confirm_tricks(&mut self) -> Result<(), DomainError> {
        rejected("confirm_tricks", tricks::confirm_tricks(&mut self.state))?;
        debug!(round = self.state.current_round, "Transition: Tricks -> Scores");
        Ok(())
    }

    pub fn reopen_bids(&mut self) -> Result<(), DomainError> {
        rejected("reopen_bids", tricks::reopen_bids(&mut self.state))?;
        debug!(round = self.state.current_round, "Transition: Tricks -> Bidding");
        Ok(())
    }

    pub fn advance_round(&mut self) -> Result<AdvanceOutcome, DomainError> {
        let finished = self.state.current_round;
        let outcome = rejected("advance_round", lifecycle::advance_round(&mut self.state))?;
        match outcome {
            AdvanceOutcome::NextRound { round_no } => {
                info!(
                    round = round_no,
                    hand_size = self.state.hand_size(),
                    trump = %self.state.trump,
                    "Advancing to next round"
                );
                debug!(finished, "Transition: Scores -> Bidding");
            }
            AdvanceOutcome::Completed => {
                info!(rounds_played = self.state.history.len(), "Game completed");
            }
        }
        Ok(outcome)
    }

    pub fn next_trump(&mut self) -> Result<(), DomainError> {
        rejected("next_trump", lifecycle::next_trump(&mut self.state))?;
        debug!(trump = %self.state.trump, "Trump advanced");
        Ok(())
    }

    pub fn view_results(&mut self) {
        lifecycle::view_results(&mut self.state);
        debug!(phase = %self.state.phase, "View results");
    }

    pub fn return_from_results(&mut self) {
        lifecycle::return_from_results(&mut self.state);
        debug!(phase = %self.state.phase, "Return from results");
    }

    pub fn reset_game(&mut self) {
        lifecycle::reset_game(&mut self.state);
        info!("Game reset");
    }

    // ---------------------------------------------------------------------
    // Reads
    // ---------------------------------------------------------------------

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::of(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn players(&self) -> &[Player] {
        &self.state.players
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.state.player(id)
    }

    pub fn current_round(&self) -> u8 {
        self.state.current_round
    }

    pub fn trump(&self) -> Suit {
        self.state.trump
    }

    pub fn scoring(&self) -> ScoringSystem {
        self.state.config.scoring
    }

    pub fn rounds_history(&self) -> &[RoundResult] {
        &self.state.history
    }

    pub fn rounds_completed(&self) -> usize {
        self.state.history.len()
    }

    pub fn is_complete(&self) -> bool {
        self.state.complete
    }

    pub fn round_info(&self) -> RoundInfo {
        RoundInfo::of(&self.state)
    }

    pub fn hand_size_for_round(round_no: u8) -> Option<u8> {
        rules::hand_size_for_round(round_no)
    }

    /// Whether `start_game` would accept this roster.
    pub fn can_start_game(roster: &[NewPlayer]) -> bool {
        players::validate_roster(roster).is_ok()
    }

    pub fn leaderboard(&self) -> Vec<&Player> {
        player_view::leaderboard(&self.state.players)
    }

    /// Current leader, if a game is running.
    pub fn winner(&self) -> Option<&Player> {
        self.leaderboard().into_iter().next()
    }

    pub fn player_stats(&self, id: &PlayerId) -> Result<PlayerStats, DomainError> {
        self.state.player_index(id)?;
        Ok(player_view::player_stats(&self.state.history, id))
    }

    pub fn bid_total(&self) -> u32 {
        bidding::bid_total(&self.state)
    }

    pub fn all_bids_entered(&self) -> bool {
        bidding::all_bids_entered(&self.state)
    }

    pub fn bids_equal_hand_size(&self) -> bool {
        bidding::bids_equal_hand_size(&self.state)
    }

    pub fn can_confirm_bids(&self) -> bool {
        bidding::can_confirm_bids(&self.state)
    }

    pub fn trick_total(&self) -> u32 {
        tricks::trick_total(&self.state)
    }

    pub fn all_tricks_entered(&self) -> bool {
        tricks::all_tricks_entered(&self.state)
    }

    pub fn can_confirm_tricks(&self) -> bool {
        tricks::can_confirm_tricks(&self.state)
    }
}
