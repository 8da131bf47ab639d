//! Property coverage: scoring is total, deterministic, and ordered.

use chainplay_core::{
    City, EnergyStyle, FocusTag, MatchProfile, Matcher, SkillLevel, Sport,
};
use chainplay_match::WeightedMatcher;
use proptest::prelude::*;

fn arb_style() -> impl Strategy<Value = Option<EnergyStyle>> {
    prop_oneof![
        Just(None),
        Just(Some(EnergyStyle::Competitive)),
        Just(Some(EnergyStyle::Social)),
        Just(Some(EnergyStyle::Strategic)),
        Just(Some(EnergyStyle::Learning)),
    ]
}

fn arb_tags() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::collection::vec(
        prop_oneof![
            Just("defi"),
            Just("ai"),
            Just("trading"),
            Just("infra"),
            Just("vc"),
        ],
        0..5,
    )
}

fn arb_city() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![
        Just(None),
        Just(Some("Dubai")),
        Just(Some("dubai")),
        Just(Some("Singapore")),
        Just(Some("London")),
    ]
}

fn arb_skill() -> impl Strategy<Value = Option<u8>> {
    proptest::option::of(1u8..=10)
}

prop_compose! {
    fn arb_profile(id: &'static str)(
        style in arb_style(),
        tags in arb_tags(),
        home in arb_city(),
        rating in arb_skill(),
    ) -> MatchProfile {
        let mut profile = MatchProfile::new(id, id);
        if let Some(style) = style {
            profile = profile.with_energy_style(style);
        }
        for raw in tags {
            profile
                .focus_tags
                .insert(FocusTag::new(raw).expect("valid tag"));
        }
        if let Some(raw) = home {
            profile = profile.with_city(City::new(raw).expect("valid city"));
        }
        if let Some(value) = rating {
            profile = profile.with_sport(
                Sport::Padel,
                SkillLevel::new(value).expect("valid level"),
            );
        }
        profile
    }
}

proptest! {
    /// Any combination of present and absent attributes yields a result
    /// whose score is the rounded reason sum, whose reasons descend by
    /// weight, and whose total never exceeds the summed category weights.
    #[test]
    fn scoring_is_total_and_ordered(
        subject in arb_profile("subject"),
        candidate in arb_profile("candidate"),
    ) {
        let result = WeightedMatcher::new().score(&subject, &candidate);

        prop_assert!(result.score() <= 100);
        prop_assert!(result.reasons().len() <= 4);

        let weights: Vec<f32> = result.reasons().iter().map(|r| r.weight).collect();
        for pair in weights.windows(2) {
            prop_assert!(pair[0] >= pair[1]);
        }

        let total: f32 = weights.iter().sum();
        prop_assert!(total.is_finite());
        prop_assert_eq!(result.score(), total.round() as u32);
    }

    /// Scoring the same pair twice is deterministic.
    #[test]
    fn scoring_is_deterministic(
        subject in arb_profile("subject"),
        candidate in arb_profile("candidate"),
    ) {
        let matcher = WeightedMatcher::new();
        prop_assert_eq!(
            matcher.score(&subject, &candidate),
            matcher.score(&subject, &candidate)
        );
    }
}
