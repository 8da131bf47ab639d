//! Skill levels on a one-to-ten scale.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A skill rating between 1 and 10 inclusive.
///
/// Zero is unrepresentable: absent ratings are modelled as `Option` rather
/// than a sentinel value, so comparisons never need a null check.
///
/// # Examples
/// ```
/// use chainplay_core::SkillLevel;
///
/// # fn main() -> Result<(), chainplay_core::SkillLevelError> {
/// let ours = SkillLevel::new(8)?;
/// let theirs = SkillLevel::new(6)?;
/// assert_eq!(ours.gap(theirs), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct SkillLevel(u8);

/// Errors returned by [`SkillLevel::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SkillLevelError {
    /// The rating was outside `1..=10`.
    #[error("skill level must be between 1 and 10, got {value}")]
    OutOfRange {
        /// The rejected rating.
        value: u8,
    },
}

impl SkillLevel {
    /// The lowest valid rating.
    pub const MIN: Self = Self(1);
    /// The highest valid rating.
    pub const MAX: Self = Self(10);

    /// Validate and construct a rating.
    ///
    /// # Errors
    /// Returns [`SkillLevelError::OutOfRange`] for values outside `1..=10`.
    pub const fn new(value: u8) -> Result<Self, SkillLevelError> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Ok(Self(value))
        } else {
            Err(SkillLevelError::OutOfRange { value })
        }
    }

    /// Return the numeric rating.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Absolute difference between two ratings.
    #[must_use]
    pub const fn gap(self, other: Self) -> u8 {
        self.0.abs_diff(other.0)
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for SkillLevel {
    type Error = SkillLevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SkillLevel> for u8 {
    fn from(level: SkillLevel) -> Self {
        level.0
    }
}
