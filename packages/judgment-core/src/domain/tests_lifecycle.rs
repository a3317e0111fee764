use crate::config::GameConfig;
use crate::domain::bidding::confirm_bids;
use crate::domain::lifecycle::{
    advance_round, next_trump, reset_game, return_from_results, start_game, view_results,
    AdvanceOutcome,
};
use crate::domain::players::NewPlayer;
use crate::domain::scoring::ScoringSystem;
use crate::domain::state::{ActivePhase, GameState, Phase};
use crate::domain::test_state_helpers::{at_round, pid, roster, set_bids, started};
use crate::domain::tricks::{confirm_tricks, record_tricks};
use crate::domain::trump::Suit;
use crate::errors::domain::{DomainError, ValidationKind};

/// Play the current round with all-zero bids (never equal to a hand size of
/// at least 1) and the given trick counts.
fn play_round(state: &mut GameState, tricks: &[u8]) {
    let zeros = vec![0; state.players.len()];
    set_bids(state, &zeros);
    confirm_bids(state).unwrap();
    for (i, &t) in tricks.iter().enumerate() {
        record_tricks(state, &pid(i), t).unwrap();
    }
    confirm_tricks(state).unwrap();
}

#[test]
fn start_game_initializes_round_one() {
    let mut state = GameState::setup();
    start_game(&mut state, roster(3), GameConfig::with_scoring(ScoringSystem::Multiplier))
        .unwrap();
    assert_eq!(state.phase, Phase::Bidding);
    assert_eq!(state.current_round, 1);
    assert_eq!(state.hand_size(), 1);
    assert_eq!(state.trump, Suit::Spades);
    assert_eq!(state.config.scoring, ScoringSystem::Multiplier);
    assert!(state.history.is_empty());
    assert!(state.players.iter().all(|p| p.total_score == 0));
    assert!(state.players.iter().all(|p| p.current_bid.is_none()));
}

#[test]
fn start_game_rejects_bad_rosters_without_changing_state() {
    let mut state = GameState::setup();
    let err = start_game(&mut state, roster(2), GameConfig::default()).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::TooFewPlayers));
    let err = start_game(&mut state, roster(11), GameConfig::default()).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::TooManyPlayers));

    let mut players = roster(3);
    players[2] = NewPlayer::new("p2", "", "#000");
    let err = start_game(&mut state, players, GameConfig::default()).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::EmptyName));

    assert_eq!(state, GameState::setup());
}

#[test]
fn start_game_only_from_setup() {
    let mut state = started(3, ScoringSystem::Standard);
    let err = start_game(&mut state, roster(4), GameConfig::default()).unwrap_err();
    assert!(matches!(err, DomainError::InvalidTransition { .. }));
    assert_eq!(state.players.len(), 3);
}

#[test]
fn advance_records_history_and_commits_scores() {
    let mut state = started(3, ScoringSystem::Standard);
    play_round(&mut state, &[0, 1, 0]);
    // bids were all zero: p0 and p2 made it
    assert_eq!(state.players[0].round_score, Some(10));
    assert_eq!(state.players[1].round_score, Some(0));

    let outcome = advance_round(&mut state).unwrap();
    assert_eq!(outcome, AdvanceOutcome::NextRound { round_no: 2 });
    assert_eq!(state.phase, Phase::Bidding);
    assert_eq!(state.trump, Suit::Diamonds);
    assert_eq!(state.hand_size(), 2);

    let totals: Vec<i32> = state.players.iter().map(|p| p.total_score).collect();
    assert_eq!(totals, [10, 0, 10]);
    assert!(state
        .players
        .iter()
        .all(|p| p.current_bid.is_none() && p.current_tricks.is_none() && p.round_score.is_none()));

    assert_eq!(state.history.len(), 1);
    let record = &state.history[0];
    assert_eq!(record.round_no, 1);
    assert_eq!(record.hand_size, 1);
    assert_eq!(record.trump, Suit::Spades);
    assert_eq!(record.results[1].bid, Some(0));
    assert_eq!(record.results[1].tricks, Some(1));
    assert_eq!(record.results[0].round_score, 10);
    assert_eq!(record.results[0].total_score_after, 10);
    assert_eq!(record.results[0].name, "Player 1");
}

#[test]
fn advance_only_from_scores() {
    let mut state = started(3, ScoringSystem::Standard);
    assert!(matches!(
        advance_round(&mut state),
        Err(DomainError::InvalidTransition { .. })
    ));
}

#[test]
fn unset_round_score_counts_as_zero() {
    let mut state = at_round(started(3, ScoringSystem::Standard), 1, Phase::Tricks);
    for i in 0..3 {
        record_tricks(&mut state, &pid(i), 0).unwrap();
    }
    confirm_tricks(&mut state).unwrap();
    advance_round(&mut state).unwrap();
    assert!(state.players.iter().all(|p| p.total_score == 0));
    assert_eq!(state.history[0].results[0].bid, None);
}

#[test]
fn fifteen_advances_complete_the_game() {
    let mut state = started(3, ScoringSystem::Standard);
    for round in 1..=15u8 {
        assert_eq!(state.current_round, round);
        play_round(&mut state, &[0, 0, 0]);
        let outcome = advance_round(&mut state).unwrap();
        if round < 15 {
            assert_eq!(outcome, AdvanceOutcome::NextRound { round_no: round + 1 });
        } else {
            assert_eq!(outcome, AdvanceOutcome::Completed);
        }
    }
    assert!(state.complete);
    assert_eq!(state.phase, Phase::Scores);
    assert_eq!(state.current_round, 15);
    assert_eq!(state.history.len(), 15);
    // everyone bid 0 and took 0: 15 × 10
    assert!(state.players.iter().all(|p| p.total_score == 150));

    let err = advance_round(&mut state).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::GameComplete));
    assert_eq!(state.history.len(), 15);
}

#[test]
fn trump_follows_rotation_across_rounds() {
    let mut state = started(3, ScoringSystem::Standard);
    let mut seen = Vec::new();
    for _ in 0..5 {
        seen.push(state.trump);
        play_round(&mut state, &[0, 0, 0]);
        advance_round(&mut state).unwrap();
    }
    assert_eq!(
        seen,
        [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades]
    );
}

#[test]
fn manual_trump_advance_is_independent_of_rounds() {
    let mut state = started(3, ScoringSystem::Standard);
    next_trump(&mut state).unwrap();
    assert_eq!(state.trump, Suit::Diamonds);
    assert_eq!(state.current_round, 1);
    for _ in 0..3 {
        next_trump(&mut state).unwrap();
    }
    assert_eq!(state.trump, Suit::Spades);

    let mut setup = GameState::setup();
    assert!(next_trump(&mut setup).is_err());
    assert_eq!(setup.trump, Suit::Spades);
}

#[test]
fn results_view_returns_to_origin() {
    let mut state = started(3, ScoringSystem::Standard);
    let before = state.clone();
    view_results(&mut state);
    assert_eq!(
        state.phase,
        Phase::Results {
            return_to: ActivePhase::Bidding
        }
    );
    // a second open is a no-op
    view_results(&mut state);
    return_from_results(&mut state);
    assert_eq!(state, before);

    play_round(&mut state, &[0, 0, 0]);
    view_results(&mut state);
    assert!(next_trump(&mut state).is_err());
    return_from_results(&mut state);
    assert_eq!(state.phase, Phase::Scores);
}

#[test]
fn results_view_during_tricks_keeps_entries() {
    let mut state = started(3, ScoringSystem::Standard);
    set_bids(&mut state, &[0, 0, 0]);
    confirm_bids(&mut state).unwrap();
    record_tricks(&mut state, &pid(0), 1).unwrap();
    let before = state.clone();

    view_results(&mut state);
    assert_eq!(
        state.phase,
        Phase::Results {
            return_to: ActivePhase::Tricks
        }
    );
    return_from_results(&mut state);
    assert_eq!(state.phase, Phase::Tricks);
    assert_eq!(state, before);
    assert_eq!(state.players[0].current_bid, Some(0));
    assert_eq!(state.players[0].current_tricks, Some(1));
}

#[test]
fn results_view_after_completion_returns_to_scores() {
    let mut state = started(3, ScoringSystem::Multiplier);
    for round_no in 1..=15 {
        play_round(&mut state, &[0, 0, 0]);
        let outcome = advance_round(&mut state).unwrap();
        if round_no == 15 {
            assert_eq!(outcome, AdvanceOutcome::Completed);
        }
    }
    assert!(state.complete);

    view_results(&mut state);
    assert_eq!(
        state.phase,
        Phase::Results {
            return_to: ActivePhase::Scores
        }
    );
    return_from_results(&mut state);
    assert_eq!(state.phase, Phase::Scores);
    assert!(state.complete);
    assert_eq!(state.current_round, 15);
    assert_eq!(state.history.len(), 15);
}

#[test]
fn results_view_is_a_no_op_in_setup() {
    let mut state = GameState::setup();
    view_results(&mut state);
    assert_eq!(state.phase, Phase::Setup);
    return_from_results(&mut state);
    assert_eq!(state.phase, Phase::Setup);
}

#[test]
fn reset_discards_everything() {
    let mut state = started(4, ScoringSystem::Multiplier);
    play_round(&mut state, &[1, 0, 0, 0]);
    advance_round(&mut state).unwrap();
    next_trump(&mut state).unwrap();
    reset_game(&mut state);
    assert_eq!(state, GameState::setup());
}
