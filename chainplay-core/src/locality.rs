//! Home localities compared as exact, case-insensitive city names.

use thiserror::Error;

use crate::focus::capitalise_first;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A member's home city.
///
/// Matching is exact and case-insensitive; no geographic proximity is
/// attempted, so "Dubai" matches "dubai" but never "Dubai Marina".
///
/// # Examples
/// ```
/// use chainplay_core::City;
///
/// # fn main() -> Result<(), chainplay_core::CityError> {
/// let ours = City::new("dubai")?;
/// let theirs = City::new("Dubai")?;
/// assert!(ours.matches(&theirs));
/// assert_eq!(ours.label(), "Dubai");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct City(String);

/// Errors returned by [`City::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CityError {
    /// The name was empty or whitespace.
    #[error("city name must contain non-whitespace characters")]
    Empty,
}

impl City {
    /// Validate and construct a city name, trimming surrounding whitespace.
    ///
    /// The provided casing is preserved for display.
    ///
    /// # Errors
    /// Returns [`CityError::Empty`] when nothing remains after trimming.
    pub fn new(raw: &str) -> Result<Self, CityError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CityError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Return the city name as provided.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Report whether two cities name the same place, ignoring case.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }

    /// Return the name with its first letter capitalised for display.
    #[must_use]
    pub fn label(&self) -> String {
        capitalise_first(&self.0)
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for City {
    type Error = CityError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(&raw)
    }
}

impl From<City> for String {
    fn from(city: City) -> Self {
        city.0
    }
}
