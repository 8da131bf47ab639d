//! Energy styles describing how a member approaches a session.
//!
//! The enum offers compile-time safety for style comparisons; absence is
//! modelled as `Option` rather than an out-of-enumeration string.
//!
//! # Examples
//! ```
//! use chainplay_core::EnergyStyle;
//!
//! assert_eq!(EnergyStyle::Competitive.as_str(), "competitive");
//! assert_eq!(EnergyStyle::Learning.to_string(), "learning");
//! assert_eq!(EnergyStyle::Strategic.label(), "Strategic");
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A member's behavioural disposition during sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum EnergyStyle {
    /// Driven by winning and measurable improvement.
    Competitive,
    /// There for the people as much as for the sport.
    Social,
    /// Plays the long game and studies the field.
    Strategic,
    /// Focused on picking up new skills.
    Learning,
}

impl EnergyStyle {
    /// Return the style as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use chainplay_core::EnergyStyle;
    ///
    /// assert_eq!(EnergyStyle::Social.as_str(), "social");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Competitive => "competitive",
            Self::Social => "social",
            Self::Strategic => "strategic",
            Self::Learning => "learning",
        }
    }

    /// Return the capitalised label used in user-facing text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Competitive => "Competitive",
            Self::Social => "Social",
            Self::Strategic => "Strategic",
            Self::Learning => "Learning",
        }
    }
}

impl std::fmt::Display for EnergyStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EnergyStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "competitive" => Ok(Self::Competitive),
            "social" => Ok(Self::Social),
            "strategic" => Ok(Self::Strategic),
            "learning" => Ok(Self::Learning),
            _ => Err(format!("unknown energy style '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(
            EnergyStyle::Competitive.to_string(),
            EnergyStyle::Competitive.as_str()
        );
    }

    #[test]
    fn parsing_ignores_case() {
        assert_eq!(
            EnergyStyle::from_str("Strategic"),
            Ok(EnergyStyle::Strategic)
        );
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = EnergyStyle::from_str("chaotic").unwrap_err();
        assert!(err.contains("unknown energy style"));
    }
}
