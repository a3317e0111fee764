//! Property tests for the scoring function.

use proptest::prelude::*;

use crate::domain::scoring::{round_score, ScoringSystem};
use crate::domain::test_gens;
use crate::domain::test_prelude;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: standard exact bids score 10 + bid.
    #[test]
    fn prop_standard_exact(bid in 0u8..=8) {
        prop_assert_eq!(round_score(bid, bid, ScoringSystem::Standard), 10 + i32::from(bid));
    }

    /// Property: multiplier exact bids follow {0→10, 1→11, n→10n}.
    #[test]
    fn prop_multiplier_exact(bid in 0u8..=8) {
        let expected = match bid {
            0 => 10,
            1 => 11,
            n => i32::from(n) * 10,
        };
        prop_assert_eq!(round_score(bid, bid, ScoringSystem::Multiplier), expected);
    }

    /// Property: any miss scores zero under every system.
    #[test]
    fn prop_miss_scores_zero(
        bid in 0u8..=8,
        tricks in 0u8..=8,
        system in test_gens::scoring_system(),
    ) {
        prop_assume!(bid != tricks);
        prop_assert_eq!(round_score(bid, tricks, system), 0);
    }

    /// Property: an exact bid always scores at least 10.
    #[test]
    fn prop_exact_scores_at_least_ten(
        bid in any::<u8>(),
        system in test_gens::scoring_system(),
    ) {
        prop_assert!(round_score(bid, bid, system) >= 10);
    }
}
