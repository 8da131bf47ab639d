//! Ranking coverage for the scripted matcher.

use chainplay_core::{MatchProfile, Matcher, ScriptedMatcher, sample_profile};
use rstest::rstest;

#[rstest]
fn ranking_is_a_stable_descending_sort() {
    let matcher = ScriptedMatcher::new()
        .with_score("c1", 80.0)
        .with_score("c2", 80.0)
        .with_score("c3", 90.0);
    let subject = sample_profile("subject");
    let candidates = vec![
        MatchProfile::new("c1", "First"),
        MatchProfile::new("c2", "Second"),
        MatchProfile::new("c3", "Third"),
    ];

    let ranked = matcher.rank(&subject, &candidates);

    let order: Vec<&str> = ranked
        .iter()
        .map(|entry| entry.candidate.id.as_str())
        .collect();
    assert_eq!(order, vec!["c3", "c1", "c2"]);
    assert_eq!(ranked[0].result.score(), 90);
    assert_eq!(ranked[1].result.score(), 80);
    assert_eq!(ranked[2].result.score(), 80);
}

#[rstest]
fn unknown_candidates_score_zero() {
    let matcher = ScriptedMatcher::new().with_score("known", 42.0);
    let subject = sample_profile("subject");
    let candidates = vec![MatchProfile::new("stranger", "Unknown")];

    let ranked = matcher.rank(&subject, &candidates);
    assert_eq!(ranked[0].result.score(), 0);
    assert!(ranked[0].result.reasons().is_empty());
}

#[rstest]
fn empty_candidate_lists_yield_empty_rankings() {
    let matcher = ScriptedMatcher::new();
    let subject = sample_profile("subject");

    let ranked = matcher.rank(&subject, &[]);
    assert!(ranked.is_empty());
}
