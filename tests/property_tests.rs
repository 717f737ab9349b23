//! Property-based tests for the LCS finder, the aligner and the learner.
//!
//! Inputs are drawn from a small alphabet so that common runs, ties and
//! near-misses show up often.

use proptest::prelude::*;
use templater::{Lcs, Segment, Templater, TemplaterConfig, align, find_lcs, find_lcs_str};

// Same scan order as the finder (b-shifts then a-shifts, left to right,
// strictly-longer wins) but never stops early.
fn exhaustive_lcs(a: &[char], b: &[char]) -> Option<Lcs> {
    let mut diagonals: Vec<(usize, usize)> = (0..b.len()).map(|i| (0, i)).collect();
    diagonals.extend((1..a.len()).map(|i| (i, 0)));
    let mut best: Option<Lcs> = None;
    for (a0, b0) in diagonals {
        let mut run = 0;
        let mut k = 0;
        while a0 + k < a.len() && b0 + k < b.len() {
            if a[a0 + k] == b[b0 + k] {
                run += 1;
                if run > best.map_or(0, |l| l.len) {
                    best = Some(Lcs {
                        len: run,
                        a_start: a0 + k + 1 - run,
                        b_start: b0 + k + 1 - run,
                    });
                }
            } else {
                run = 0;
            }
            k += 1;
        }
    }
    best
}

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

// (starts with a wildcard, ends with a wildcard)
fn edge_wildcards(learner: &Templater) -> (bool, bool) {
    let segs = learner.template().map(|t| t.segments()).unwrap_or(&[]);
    (
        segs.first().is_some_and(Segment::is_wildcard),
        segs.last().is_some_and(Segment::is_wildcard),
    )
}

#[test]
fn relearning_keeps_leading_wildcard() {
    let mut learner = Templater::default();
    learner.learn_all(["  b ", "  ab ", "b "]).unwrap();
    let before = learner.template().unwrap().clone();
    assert_eq!(
        before.segments(),
        &[Segment::Wildcard, Segment::Literal("b ".to_string())]
    );
    learner.learn("b ").unwrap();
    assert_eq!(learner.template().unwrap(), &before);
}

#[test]
fn relearning_keeps_wildcards_at_both_ends() {
    let mut learner = Templater::default();
    learner
        .learn_all(["[draft] status: green (v2)", "status: green"])
        .unwrap();
    let before = learner.template().unwrap().clone();
    assert_eq!(
        before.segments(),
        &[
            Segment::Wildcard,
            Segment::Literal("status: green".to_string()),
            Segment::Wildcard,
        ]
    );
    learner.learn("status: green").unwrap();
    assert_eq!(learner.template().unwrap(), &before);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_short_circuit_matches_exhaustive_scan(a in "[abc]{0,24}", b in "[abc]{0,24}") {
        let (ca, cb) = (chars(&a), chars(&b));
        prop_assert_eq!(find_lcs(&ca, &cb), exhaustive_lcs(&ca, &cb));
    }

    #[test]
    fn prop_lcs_points_at_equal_runs(a in "[ab ]{0,30}", b in "[ab ]{0,30}") {
        let (ca, cb) = (chars(&a), chars(&b));
        if let Some(m) = find_lcs(&ca, &cb) {
            prop_assert!(m.len > 0);
            prop_assert_eq!(
                &ca[m.a_start..m.a_start + m.len],
                &cb[m.b_start..m.b_start + m.len]
            );
        }
    }

    #[test]
    fn prop_identical_inputs_match_whole(a in "[a-z]{1,40}") {
        let m = find_lcs_str(&a, &a).unwrap();
        prop_assert_eq!((m.len, m.a_start, m.b_start), (a.chars().count(), 0, 0));
    }

    #[test]
    fn prop_first_sample_is_one_literal(t in "[a-z ]{1,40}") {
        let mut learner = Templater::default();
        learner.learn(&t).unwrap();
        prop_assert_eq!(
            learner.template().unwrap().segments(),
            &[Segment::Literal(t.clone())]
        );
    }

    #[test]
    fn prop_literals_respect_threshold(
        samples in prop::collection::vec("[abc ]{0,20}", 1..5),
        k in 1usize..6,
    ) {
        let mut learner = Templater::new(TemplaterConfig {
            min_block_size: k,
            ..TemplaterConfig::default()
        });
        for s in &samples {
            learner.learn(s).unwrap();
            for lit in learner.template().unwrap().literals() {
                prop_assert!(lit.chars().count() >= k);
            }
        }
    }

    #[test]
    fn prop_literals_are_ordered_pieces_of_latest_sample(
        samples in prop::collection::vec("[abc ]{0,20}", 1..5),
    ) {
        let mut learner = Templater::default();
        for s in &samples {
            learner.learn(s).unwrap();
            let mut cursor = 0usize;
            for lit in learner.template().unwrap().literals() {
                let pos = s[cursor..].find(lit);
                prop_assert!(pos.is_some(), "{:?} not found after {} in {:?}", lit, cursor, s);
                cursor += pos.unwrap_or(0) + lit.len();
            }
        }
    }

    #[test]
    fn prop_relearning_never_drops_edge_wildcards(
        samples in prop::collection::vec("[ab ]{0,8}", 1..5),
        k in 1usize..4,
    ) {
        let mut learner = Templater::new(TemplaterConfig {
            min_block_size: k,
            ..TemplaterConfig::default()
        });
        for s in &samples {
            learner.learn(s).unwrap();
        }
        let (lead, trail) = edge_wildcards(&learner);
        if let Some(last) = samples.last() {
            learner.learn(last).unwrap();
        }
        let (lead_after, trail_after) = edge_wildcards(&learner);
        prop_assert!(!lead || lead_after, "leading wildcard lost for {:?}", samples);
        prop_assert!(!trail || trail_after, "trailing wildcard lost for {:?}", samples);
    }

    #[test]
    fn prop_wildcards_never_adjacent(a in "[abc]{0,20}", b in "[abc]{0,20}") {
        let segs = align(&chars(&a), &chars(&b), 1);
        for pair in segs.windows(2) {
            prop_assert!(!(pair[0].is_wildcard() && pair[1].is_wildcard()));
        }
    }
}
