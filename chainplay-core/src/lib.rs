//! Core domain types for the CHAINPLAY engine.
//!
//! These models cover the attributes considered when matching members for
//! sports sessions, the [`Matcher`] seam implemented by scoring policies,
//! and the reputation mechanics (tiers and leaderboard standings) derived
//! from participation. Constructors validate their input and return
//! `Result` to keep downstream components honest; once constructed, every
//! value is well-formed and scoring over it is total.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod energy;
pub mod focus;
pub mod leaderboard;
pub mod locality;
pub mod matcher;
pub mod profile;
pub mod reputation;
pub mod skill;
pub mod sport;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use energy::EnergyStyle;
pub use focus::{FocusTag, FocusTagError, FocusTags};
pub use leaderboard::{Standings, StandingsEntry, StandingsRow};
pub use locality::{City, CityError};
pub use matcher::{MatchReason, MatchResult, Matcher, RankedMatch, ReasonCategory};
pub use profile::{MatchProfile, ProfileId};
pub use reputation::{ActivityStats, MemberTier};
pub use skill::{SkillLevel, SkillLevelError};
pub use sport::{Sport, SportSkills};
#[cfg(any(test, feature = "test-support"))]
pub use test_support::{ScriptedMatcher, sample_profile};
