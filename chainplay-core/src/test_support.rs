//! Test-only fixtures and a scripted [`Matcher`] implementation used by
//! unit and behaviour tests.

use std::collections::HashMap;

use crate::{
    City, EnergyStyle, FocusTag, MatchProfile, MatchReason, MatchResult, Matcher, ProfileId,
    ReasonCategory, SkillLevel, Sport,
};

/// `Matcher` returning pre-scripted scores keyed by candidate identifier.
///
/// Unknown candidates score zero. Useful for exercising ranking without
/// depending on a real scoring policy.
#[derive(Debug, Clone, Default)]
pub struct ScriptedMatcher {
    scores: HashMap<ProfileId, f32>,
}

impl ScriptedMatcher {
    /// Create a matcher with no scripted scores.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the score for one candidate while returning `self`.
    #[must_use]
    pub fn with_score(mut self, id: impl Into<ProfileId>, score: f32) -> Self {
        self.scores.insert(id.into(), score);
        self
    }
}

impl Matcher for ScriptedMatcher {
    fn score(&self, _subject: &MatchProfile, candidate: &MatchProfile) -> MatchResult {
        self.scores
            .get(&candidate.id)
            .copied()
            .map_or_else(MatchResult::none, |weight| {
                MatchResult::from_reasons(vec![MatchReason::new(
                    ReasonCategory::Energy,
                    "scripted",
                    weight,
                )])
            })
    }
}

/// A fully-populated profile for tests: competitive, interested in defi,
/// ai, and trading, based in Dubai, playing padel at level eight.
#[must_use]
pub fn sample_profile(id: &str) -> MatchProfile {
    let mut profile = MatchProfile::new(id, "Sample Member")
        .with_energy_style(EnergyStyle::Competitive);
    for raw in ["defi", "ai", "trading"] {
        if let Ok(tag) = FocusTag::new(raw) {
            profile.focus_tags.insert(tag);
        }
    }
    if let Ok(city) = City::new("Dubai") {
        profile = profile.with_city(city);
    }
    if let Ok(level) = SkillLevel::new(8) {
        profile = profile.with_sport(Sport::Padel, level);
    }
    profile
}
