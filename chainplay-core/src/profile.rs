//! Member profiles: the attributes considered when matching players.

use crate::{City, EnergyStyle, FocusTag, FocusTags, SkillLevel, Sport, SportSkills};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque member identifier issued by the profile store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(transparent)
)]
pub struct ProfileId(String);

impl ProfileId {
    /// Wrap a raw identifier.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProfileId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ProfileId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A member profile as considered by the matcher.
///
/// Every scored attribute is optional; an absent attribute removes its
/// category from scoring rather than penalising the pair.
///
/// # Examples
/// ```
/// use chainplay_core::{EnergyStyle, FocusTag, MatchProfile};
///
/// # fn main() -> Result<(), chainplay_core::FocusTagError> {
/// let profile = MatchProfile::new("u-1", "Marcus W.")
///     .with_energy_style(EnergyStyle::Competitive)
///     .with_focus_tag(FocusTag::new("defi")?);
/// assert_eq!(profile.focus_tags.len(), 1);
/// assert!(profile.city.is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchProfile {
    /// Stable identifier.
    pub id: ProfileId,
    /// Name shown alongside match results.
    pub display_name: String,
    /// Behavioural energy style, when declared.
    #[cfg_attr(feature = "serde", serde(default))]
    pub energy_style: Option<EnergyStyle>,
    /// Topical interests.
    #[cfg_attr(feature = "serde", serde(default))]
    pub focus_tags: FocusTags,
    /// Home city, when declared.
    #[cfg_attr(feature = "serde", serde(default))]
    pub city: Option<City>,
    /// Per-sport skill ratings.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sports: SportSkills,
}

impl MatchProfile {
    /// Construct a profile with no scored attributes.
    #[must_use]
    pub fn new(id: impl Into<ProfileId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            energy_style: None,
            focus_tags: FocusTags::new(),
            city: None,
            sports: SportSkills::new(),
        }
    }

    /// Set the energy style while returning `self` for chaining.
    #[must_use]
    pub fn with_energy_style(mut self, style: EnergyStyle) -> Self {
        self.energy_style = Some(style);
        self
    }

    /// Add a focus tag (duplicates are ignored) while returning `self`.
    #[must_use]
    pub fn with_focus_tag(mut self, tag: FocusTag) -> Self {
        self.focus_tags.insert(tag);
        self
    }

    /// Set the home city while returning `self` for chaining.
    #[must_use]
    pub fn with_city(mut self, city: City) -> Self {
        self.city = Some(city);
        self
    }

    /// Rate a sport while returning `self` for chaining.
    #[must_use]
    pub fn with_sport(mut self, sport: Sport, level: SkillLevel) -> Self {
        self.sports.set(sport, level);
        self
    }

    /// The single skill scalar used when comparing two members: the
    /// strongest rated sport, when any sport is rated.
    #[must_use]
    pub fn representative_skill(&self) -> Option<SkillLevel> {
        self.sports.highest()
    }
}
