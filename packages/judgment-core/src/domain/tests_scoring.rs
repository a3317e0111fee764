use crate::domain::scoring::{bid_made, round_score, ScoringSystem};
use crate::errors::domain::ValidationKind;

#[test]
fn standard_exact_bid_scores_ten_plus_bid() {
    assert_eq!(round_score(0, 0, ScoringSystem::Standard), 10);
    assert_eq!(round_score(1, 1, ScoringSystem::Standard), 11);
    assert_eq!(round_score(2, 2, ScoringSystem::Standard), 12);
    assert_eq!(round_score(8, 8, ScoringSystem::Standard), 18);
}

#[test]
fn multiplier_table_is_irregular_below_two() {
    // 0 → 10 and 1 → 11, then "add a zero"
    assert_eq!(round_score(0, 0, ScoringSystem::Multiplier), 10);
    assert_eq!(round_score(1, 1, ScoringSystem::Multiplier), 11);
    assert_eq!(round_score(2, 2, ScoringSystem::Multiplier), 20);
    assert_eq!(round_score(5, 5, ScoringSystem::Multiplier), 50);
    assert_eq!(round_score(8, 8, ScoringSystem::Multiplier), 80);
}

#[test]
fn missed_bid_scores_nothing() {
    for system in [ScoringSystem::Standard, ScoringSystem::Multiplier] {
        assert_eq!(round_score(2, 1, system), 0);
        assert_eq!(round_score(0, 3, system), 0);
        assert_eq!(round_score(1, 0, system), 0);
    }
}

#[test]
fn bid_made_requires_exact_and_positive_score() {
    assert!(bid_made(2, 2, 12));
    assert!(!bid_made(2, 1, 0));
    assert!(!bid_made(2, 2, 0));
}

#[test]
fn scoring_system_parses_and_describes_itself() {
    assert_eq!("standard".parse::<ScoringSystem>(), Ok(ScoringSystem::Standard));
    assert_eq!(" Multiplier ".parse::<ScoringSystem>(), Ok(ScoringSystem::Multiplier));
    let err = "double".parse::<ScoringSystem>().unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::ParseScoringSystem));

    assert_eq!(ScoringSystem::default(), ScoringSystem::Standard);
    assert_eq!(ScoringSystem::Standard.label(), "Standard Scoring");
    assert_eq!(ScoringSystem::Multiplier.label(), "Multiplier Scoring");
    assert!(ScoringSystem::Multiplier.description().contains("1→11"));
    assert_eq!(ScoringSystem::Multiplier.to_string(), "multiplier");
}
