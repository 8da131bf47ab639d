//! Unit coverage for the weighted matcher.
#![forbid(unsafe_code)]

use chainplay_core::{
    City, EnergyStyle, FocusTag, MatchProfile, Matcher, ReasonCategory, SkillLevel, Sport,
};
use rstest::rstest;

use crate::{CategoryWeights, WeightedMatcher, WeightsError, complement_of};

fn profile(id: &str) -> MatchProfile {
    MatchProfile::new(id, id.to_owned())
}

fn with_tags(mut base: MatchProfile, tags: &[&str]) -> MatchProfile {
    for raw in tags {
        base.focus_tags.insert(FocusTag::new(raw).expect("valid tag"));
    }
    base
}

fn skill(value: u8) -> SkillLevel {
    SkillLevel::new(value).expect("valid level")
}

#[rstest]
fn complement_table_is_symmetric() {
    for style in [
        EnergyStyle::Competitive,
        EnergyStyle::Social,
        EnergyStyle::Strategic,
        EnergyStyle::Learning,
    ] {
        assert_ne!(complement_of(style), style);
        assert_eq!(complement_of(complement_of(style)), style);
    }
}

#[rstest]
fn weights_reject_zero_total() {
    let err = CategoryWeights {
        energy: 0.0,
        focus: 0.0,
        locality: 0.0,
        skill: 0.0,
    }
    .validate()
    .expect_err("zero weights should be invalid");
    assert_eq!(err, WeightsError::Invalid);
}

#[rstest]
#[case(f32::NAN)]
#[case(f32::INFINITY)]
#[case(-1.0)]
fn weights_reject_unusable_energy(#[case] energy: f32) {
    let weights = CategoryWeights {
        energy,
        ..CategoryWeights::default()
    };
    assert!(WeightedMatcher::with_weights(weights).is_err());
}

#[rstest]
fn exact_energy_match_earns_full_weight() {
    let subject = profile("s").with_energy_style(EnergyStyle::Competitive);
    let candidate = profile("c").with_energy_style(EnergyStyle::Competitive);

    let result = WeightedMatcher::new().score(&subject, &candidate);

    assert_eq!(result.score(), 40);
    let reason = &result.reasons()[0];
    assert_eq!(reason.category, ReasonCategory::Energy);
    assert_eq!(reason.text, "Both prefer Competitive energy");
}

#[rstest]
#[case(EnergyStyle::Competitive, EnergyStyle::Strategic)]
#[case(EnergyStyle::Strategic, EnergyStyle::Competitive)]
#[case(EnergyStyle::Social, EnergyStyle::Learning)]
#[case(EnergyStyle::Learning, EnergyStyle::Social)]
#[expect(
    clippy::float_arithmetic,
    reason = "tests compare floating point weights"
)]
fn complementary_styles_earn_partial_weight(
    #[case] ours: EnergyStyle,
    #[case] theirs: EnergyStyle,
) {
    let subject = profile("s").with_energy_style(ours);
    let candidate = profile("c").with_energy_style(theirs);

    let result = WeightedMatcher::new().score(&subject, &candidate);

    assert_eq!(result.score(), 24);
    let reason = &result.reasons()[0];
    assert!((reason.weight - 24.0).abs() < 1e-4);
    assert_eq!(
        reason.text,
        format!("Complementary energy: {} & {}", ours.label(), theirs.label())
    );
}

#[rstest]
fn unrelated_styles_contribute_nothing() {
    let subject = profile("s").with_energy_style(EnergyStyle::Competitive);
    let candidate = profile("c").with_energy_style(EnergyStyle::Social);

    let result = WeightedMatcher::new().score(&subject, &candidate);
    assert_eq!(result.score(), 0);
    assert!(result.reasons().is_empty());
}

#[rstest]
#[expect(
    clippy::float_arithmetic,
    reason = "tests compare floating point weights"
)]
fn focus_overlap_is_measured_against_the_larger_set() {
    let subject = with_tags(profile("s"), &["defi", "ai"]);
    let candidate = with_tags(profile("c"), &["defi"]);

    let result = WeightedMatcher::new().score(&subject, &candidate);

    // One shared tag out of a largest set of two: half of 35.
    let reason = &result.reasons()[0];
    assert!((reason.weight - 17.5).abs() < 1e-6);
    assert_eq!(reason.text, "Shared interests: Defi");
    assert_eq!(result.score(), 18);
}

#[rstest]
#[expect(
    clippy::float_arithmetic,
    reason = "tests compare floating point weights"
)]
fn focus_reason_lists_at_most_three_tags() {
    let tags = ["defi", "ai", "trading", "infra"];
    let subject = with_tags(profile("s"), &tags);
    let candidate = with_tags(profile("c"), &tags);

    let result = WeightedMatcher::new().score(&subject, &candidate);

    let reason = &result.reasons()[0];
    assert_eq!(reason.text, "Shared interests: Defi, Ai, Trading");
    assert!((reason.weight - 35.0).abs() < 1e-6);
}

#[rstest]
fn disjoint_focus_sets_contribute_nothing() {
    let subject = with_tags(profile("s"), &["defi"]);
    let candidate = with_tags(profile("c"), &["infra"]);

    let result = WeightedMatcher::new().score(&subject, &candidate);
    assert!(result.reasons().is_empty());
}

#[rstest]
fn locality_match_ignores_case_but_not_spelling() {
    let matcher = WeightedMatcher::new();
    let subject = profile("s").with_city(City::new("Dubai").expect("valid city"));

    let same = profile("c1").with_city(City::new("dubai").expect("valid city"));
    let result = matcher.score(&subject, &same);
    assert_eq!(result.score(), 15);
    assert_eq!(result.reasons()[0].text, "Both based in Dubai");

    let nearby = profile("c2").with_city(City::new("Dubai Marina").expect("valid city"));
    assert_eq!(matcher.score(&subject, &nearby).score(), 0);
}

#[rstest]
#[case(8, 8, 10)]
#[case(8, 7, 10)]
#[case(8, 6, 5)]
#[case(8, 5, 0)]
#[case(2, 9, 0)]
fn skill_credit_follows_the_rating_gap(
    #[case] ours: u8,
    #[case] theirs: u8,
    #[case] expected: u32,
) {
    let subject = profile("s").with_sport(Sport::Padel, skill(ours));
    let candidate = profile("c").with_sport(Sport::Tennis, skill(theirs));

    let result = WeightedMatcher::new().score(&subject, &candidate);
    assert_eq!(result.score(), expected);
}

#[rstest]
fn skill_reasons_name_the_gap_band() {
    let matcher = WeightedMatcher::new();
    let subject = profile("s").with_sport(Sport::Padel, skill(8));

    let close = profile("c1").with_sport(Sport::Padel, skill(7));
    assert_eq!(
        matcher.score(&subject, &close).reasons()[0].text,
        "Similar skill levels for balanced competition"
    );

    let growth = profile("c2").with_sport(Sport::Padel, skill(6));
    assert_eq!(
        matcher.score(&subject, &growth).reasons()[0].text,
        "Compatible skill range for growth"
    );
}

#[rstest]
fn absent_attributes_only_skip_their_category() {
    let subject = with_tags(profile("s"), &["defi"])
        .with_energy_style(EnergyStyle::Competitive)
        .with_city(City::new("Dubai").expect("valid city"))
        .with_sport(Sport::Padel, skill(8));
    // The candidate only declares a city; every other category is skipped.
    let candidate = profile("c").with_city(City::new("dubai").expect("valid city"));

    let result = WeightedMatcher::new().score(&subject, &candidate);
    assert_eq!(result.score(), 15);
    assert_eq!(result.reasons().len(), 1);
    assert_eq!(result.reasons()[0].category, ReasonCategory::Locality);
}

#[rstest]
fn custom_weights_scale_contributions() {
    let matcher = WeightedMatcher::with_weights(CategoryWeights {
        energy: 10.0,
        focus: 10.0,
        locality: 10.0,
        skill: 10.0,
    })
    .expect("valid weights");

    let subject = profile("s").with_energy_style(EnergyStyle::Competitive);
    let candidate = profile("c").with_energy_style(EnergyStyle::Strategic);

    // Complementary credit scales with the configured energy weight.
    let result = matcher.score(&subject, &candidate);
    assert_eq!(result.score(), 6);
}
