//! Facade crate for the CHAINPLAY matching engine.
//!
//! This crate re-exports the core domain types and exposes the weighted
//! matcher behind a feature flag.

#![forbid(unsafe_code)]

pub use chainplay_core::{
    ActivityStats, City, CityError, EnergyStyle, FocusTag, FocusTagError, FocusTags,
    MatchProfile, MatchReason, MatchResult, Matcher, MemberTier, ProfileId, RankedMatch,
    ReasonCategory, SkillLevel, SkillLevelError, Sport, SportSkills, Standings, StandingsEntry,
    StandingsRow,
};

#[cfg(feature = "matcher")]
pub use chainplay_match::{CategoryWeights, WeightedMatcher, WeightsError};
