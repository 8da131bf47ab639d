//! Weighted compatibility scoring between member profiles.
//!
//! [`WeightedMatcher`] implements [`chainplay_core::Matcher`] with an
//! additive four-category policy: energy-style alignment, shared focus
//! tags, a common home city, and comparable skill ratings. Each category
//! contributes at most its configured weight and is evaluated only when
//! both profiles populate the attribute, so absent data never penalises a
//! pair. With the default weights the categories sum to 100 and a score
//! reads as a percentage.
//!
//! Scoring is pure and synchronous: no I/O, no shared mutable state, and
//! no failure modes. Results are recomputed on demand and never persisted.
//!
//! # Examples
//!
//! ```
//! use chainplay_core::{EnergyStyle, MatchProfile, Matcher};
//! use chainplay_match::WeightedMatcher;
//!
//! let subject = MatchProfile::new("u-1", "Marcus W.")
//!     .with_energy_style(EnergyStyle::Competitive);
//! let candidate = MatchProfile::new("u-2", "Elena K.")
//!     .with_energy_style(EnergyStyle::Competitive);
//!
//! let result = WeightedMatcher::new().score(&subject, &candidate);
//! assert_eq!(result.score(), 40);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod types;

pub use error::WeightsError;
pub use types::CategoryWeights;

use chainplay_core::{
    EnergyStyle, MatchProfile, MatchReason, MatchResult, Matcher, ReasonCategory,
};

/// Fraction of the energy weight granted to complementary styles.
const COMPLEMENTARY_CREDIT: f32 = 0.6;
/// Fraction of the skill weight granted when ratings differ by two.
const GROWTH_SKILL_CREDIT: f32 = 0.5;
/// Largest rating gap still treated as evenly matched.
const BALANCED_SKILL_GAP: u8 = 1;
/// Rating gap that earns partial skill credit.
const GROWTH_SKILL_GAP: u8 = 2;
/// Shared focus tags named in the reason text; further overlap still
/// counts towards the score but is not listed.
const FOCUS_REASON_TAGS: usize = 3;

/// The style considered complementary to `style`.
///
/// Competitive pairs with strategic and social pairs with learning. The
/// table is symmetric as authored; lookups nevertheless run from the
/// subject's side only, and a unit test pins the symmetry so an edit to
/// one pairing cannot drift silently.
pub(crate) const fn complement_of(style: EnergyStyle) -> EnergyStyle {
    match style {
        EnergyStyle::Competitive => EnergyStyle::Strategic,
        EnergyStyle::Strategic => EnergyStyle::Competitive,
        EnergyStyle::Social => EnergyStyle::Learning,
        EnergyStyle::Learning => EnergyStyle::Social,
    }
}

/// Matcher applying the additive weighted-category policy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeightedMatcher {
    weights: CategoryWeights,
}

impl WeightedMatcher {
    /// Construct a matcher with the default category weights.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a matcher with custom category weights.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when a weight is not finite or negative,
    /// or when all weights are zero.
    pub fn with_weights(weights: CategoryWeights) -> Result<Self, WeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// The category weights in effect.
    #[must_use]
    pub const fn weights(&self) -> CategoryWeights {
        self.weights
    }

    fn energy_reason(&self, subject: &MatchProfile, candidate: &MatchProfile) -> Option<MatchReason> {
        let ours = subject.energy_style?;
        let theirs = candidate.energy_style?;
        if ours == theirs {
            return Some(MatchReason::new(
                ReasonCategory::Energy,
                format!("Both prefer {} energy", ours.label()),
                self.weights.energy,
            ));
        }
        // The lookup runs from the subject's side, matching the table as
        // authored.
        if complement_of(ours) == theirs {
            #[expect(
                clippy::float_arithmetic,
                reason = "partial credit scales the category weight"
            )]
            let weight = self.weights.energy * COMPLEMENTARY_CREDIT;
            return Some(MatchReason::new(
                ReasonCategory::Energy,
                format!(
                    "Complementary energy: {} & {}",
                    ours.label(),
                    theirs.label()
                ),
                weight,
            ));
        }
        None
    }

    #[expect(
        clippy::cast_precision_loss,
        clippy::float_arithmetic,
        reason = "overlap ratios are small counts scaling the category weight"
    )]
    fn focus_reason(&self, subject: &MatchProfile, candidate: &MatchProfile) -> Option<MatchReason> {
        let shared = subject.focus_tags.shared_with(&candidate.focus_tags);
        if shared.is_empty() {
            return None;
        }
        // Overlap is measured against the larger of the two tag sets, so a
        // narrow profile cannot dominate a broad one.
        let larger = subject.focus_tags.len().max(candidate.focus_tags.len());
        let ratio = shared.len() as f32 / larger as f32;
        let listed = shared
            .iter()
            .take(FOCUS_REASON_TAGS)
            .map(|tag| tag.label())
            .collect::<Vec<_>>()
            .join(", ");
        Some(MatchReason::new(
            ReasonCategory::Focus,
            format!("Shared interests: {listed}"),
            self.weights.focus * ratio,
        ))
    }

    fn locality_reason(
        &self,
        subject: &MatchProfile,
        candidate: &MatchProfile,
    ) -> Option<MatchReason> {
        let ours = subject.city.as_ref()?;
        let theirs = candidate.city.as_ref()?;
        if !ours.matches(theirs) {
            return None;
        }
        Some(MatchReason::new(
            ReasonCategory::Locality,
            format!("Both based in {}", ours.label()),
            self.weights.locality,
        ))
    }

    fn skill_reason(&self, subject: &MatchProfile, candidate: &MatchProfile) -> Option<MatchReason> {
        let ours = subject.representative_skill()?;
        let theirs = candidate.representative_skill()?;
        let gap = ours.gap(theirs);
        if gap <= BALANCED_SKILL_GAP {
            return Some(MatchReason::new(
                ReasonCategory::Skill,
                "Similar skill levels for balanced competition",
                self.weights.skill,
            ));
        }
        if gap == GROWTH_SKILL_GAP {
            #[expect(
                clippy::float_arithmetic,
                reason = "partial credit halves the category weight"
            )]
            let weight = self.weights.skill * GROWTH_SKILL_CREDIT;
            return Some(MatchReason::new(
                ReasonCategory::Skill,
                "Compatible skill range for growth",
                weight,
            ));
        }
        None
    }
}

impl Matcher for WeightedMatcher {
    fn score(&self, subject: &MatchProfile, candidate: &MatchProfile) -> MatchResult {
        let reasons: Vec<MatchReason> = [
            self.energy_reason(subject, candidate),
            self.focus_reason(subject, candidate),
            self.locality_reason(subject, candidate),
            self.skill_reason(subject, candidate),
        ]
        .into_iter()
        .flatten()
        .collect();
        let result = MatchResult::from_reasons(reasons);
        log::trace!(
            "scored {} against {}: {}",
            candidate.id,
            subject.id,
            result.score()
        );
        result
    }
}

#[cfg(test)]
mod tests;
