//! Tunable weights for the scoring categories.
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::WeightsError;

/// Maximum contribution of each scoring category.
///
/// The defaults sum to 100 so a full-house match reads as a percentage:
/// energy 40, focus 35, locality 15, skill 10.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryWeights {
    /// Maximum contribution of energy-style alignment.
    pub energy: f32,
    /// Maximum contribution of shared focus tags.
    pub focus: f32,
    /// Maximum contribution of a common home city.
    pub locality: f32,
    /// Maximum contribution of comparable skill ratings.
    pub skill: f32,
}

impl CategoryWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError::Invalid`] when a weight is not finite or
    /// negative, or when all weights are zero.
    pub fn validate(self) -> Result<Self, WeightsError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(WeightsError::Invalid)
        }
    }

    /// Sum of all category weights: the highest achievable raw score.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the total is a simple sum of weights"
    )]
    pub const fn total(self) -> f32 {
        self.energy + self.focus + self.locality + self.skill
    }

    const fn is_valid(self) -> bool {
        self.has_finite_values() && self.has_non_negative_values() && self.has_non_zero_total()
    }

    const fn has_finite_values(self) -> bool {
        self.energy.is_finite()
            && self.focus.is_finite()
            && self.locality.is_finite()
            && self.skill.is_finite()
    }

    const fn has_non_negative_values(self) -> bool {
        self.energy >= 0.0_f32
            && self.focus >= 0.0_f32
            && self.locality >= 0.0_f32
            && self.skill >= 0.0_f32
    }

    const fn has_non_zero_total(self) -> bool {
        self.total() != 0.0_f32
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            energy: 40.0_f32,
            focus: 35.0_f32,
            locality: 15.0_f32,
            skill: 10.0_f32,
        }
    }
}
