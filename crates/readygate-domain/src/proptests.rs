//! Property tests for the scoring and summary invariants.

use crate::score::{readiness_score, MAX_DEDUCTION, WEIGHT_HIGH, WEIGHT_LOW, WEIGHT_MEDIUM};
use crate::test_support::{auth_rule, column, function, metadata, table};
use crate::evaluate;
use proptest::prelude::*;
use readygate_types::Summary;

fn arbitrary_metadata() -> impl Strategy<Value = readygate_types::BackendMetadata> {
    let tables = proptest::collection::vec(
        (
            "[a-z]{1,8}(_id)?",
            proptest::collection::vec("[a-z]{1,8}(_id)?", 0..4),
        )
            .prop_map(|(name, columns)| {
                table(&name, columns.iter().map(|c| column(c)).collect())
            }),
        0..4,
    );
    let rules = proptest::collection::vec(
        (
            "(GET|POST|PUT|PATCH|DELETE|get|delete)",
            any::<bool>(),
            proptest::collection::vec("(user|admin|moderator)", 0..3),
        )
            .prop_map(|(method, requires_auth, roles)| {
                let roles: Vec<&str> = roles.iter().map(String::as_str).collect();
                auth_rule("/things", &method, requires_auth, &roles)
            }),
        0..4,
    );
    let functions = proptest::collection::vec(
        ("[a-z]{1,8}", proptest::option::of(any::<bool>()))
            .prop_map(|(name, destructive)| function(&name, destructive)),
        0..3,
    );

    (tables, rules, functions).prop_map(|(t, r, f)| metadata(t, r, f))
}

proptest! {
    #[test]
    fn score_is_always_in_bounds(high in 0u32..50, medium in 0u32..50, low in 0u32..50) {
        let score = readiness_score(&Summary { high, medium, low });
        prop_assert!(score <= 100);
    }

    #[test]
    fn score_matches_the_capped_deduction_formula(
        high in 0u32..50,
        medium in 0u32..50,
        low in 0u32..50,
    ) {
        let summary = Summary { high, medium, low };
        let raw = WEIGHT_HIGH * high + WEIGHT_MEDIUM * medium + WEIGHT_LOW * low;
        let expected = 100 - raw.min(MAX_DEDUCTION);
        prop_assert_eq!(u32::from(readiness_score(&summary)), expected);
    }

    #[test]
    fn any_findings_at_all_floor_the_score_at_20(
        high in 0u32..50,
        medium in 0u32..50,
        low in 0u32..50,
    ) {
        prop_assume!(high + medium + low > 0);
        let score = readiness_score(&Summary { high, medium, low });
        prop_assert!((20..100).contains(&u32::from(score)));
    }

    #[test]
    fn summary_always_partitions_the_findings(meta in arbitrary_metadata()) {
        let evaluation = evaluate(&meta);
        prop_assert_eq!(
            evaluation.summary.total() as usize,
            evaluation.findings.len()
        );
        prop_assert_eq!(
            u32::from(evaluation.score),
            100 - (WEIGHT_HIGH * evaluation.summary.high
                + WEIGHT_MEDIUM * evaluation.summary.medium
                + WEIGHT_LOW * evaluation.summary.low)
                .min(MAX_DEDUCTION)
        );
    }

    #[test]
    fn evaluation_is_deterministic(meta in arbitrary_metadata()) {
        let first = evaluate(&meta);
        let second = evaluate(&meta);
        prop_assert_eq!(first.findings, second.findings);
        prop_assert_eq!(first.score, second.score);
    }
}
