//! Sports and per-sport skill ratings.

use std::collections::BTreeMap;

use crate::SkillLevel;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sports a session can be organised around.
///
/// # Examples
/// ```
/// use chainplay_core::Sport;
///
/// assert_eq!(Sport::Padel.as_str(), "padel");
/// assert_eq!(Sport::Running.to_string(), "running");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Sport {
    /// Padel.
    Padel,
    /// Tennis.
    Tennis,
    /// Golf.
    Golf,
    /// Gym and strength training.
    Gym,
    /// Running.
    Running,
    /// Combat sports.
    Combat,
    /// Yoga.
    Yoga,
    /// Pilates.
    Pilates,
}

impl Sport {
    /// Return the sport as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Padel => "padel",
            Self::Tennis => "tennis",
            Self::Golf => "golf",
            Self::Gym => "gym",
            Self::Running => "running",
            Self::Combat => "combat",
            Self::Yoga => "yoga",
            Self::Pilates => "pilates",
        }
    }
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Sport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "padel" => Ok(Self::Padel),
            "tennis" => Ok(Self::Tennis),
            "golf" => Ok(Self::Golf),
            "gym" => Ok(Self::Gym),
            "running" => Ok(Self::Running),
            "combat" => Ok(Self::Combat),
            "yoga" => Ok(Self::Yoga),
            "pilates" => Ok(Self::Pilates),
            _ => Err(format!("unknown sport '{s}'")),
        }
    }
}

/// Per-sport skill ratings for one member.
///
/// Iteration follows the [`Sport`] declaration order, keeping derived
/// values deterministic.
///
/// # Examples
/// ```
/// use chainplay_core::{SkillLevel, Sport, SportSkills};
///
/// # fn main() -> Result<(), chainplay_core::SkillLevelError> {
/// let mut skills = SportSkills::new();
/// skills.set(Sport::Padel, SkillLevel::new(8)?);
/// skills.set(Sport::Golf, SkillLevel::new(5)?);
/// assert_eq!(skills.highest(), Some(SkillLevel::new(8)?));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(transparent)
)]
pub struct SportSkills {
    levels: BTreeMap<Sport, SkillLevel>,
}

impl SportSkills {
    /// Construct an empty rating set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Insert or update the rating for a sport.
    pub fn set(&mut self, sport: Sport, level: SkillLevel) {
        self.levels.insert(sport, level);
    }

    /// Return the rating for a sport, if present.
    #[must_use]
    pub fn get(&self, sport: Sport) -> Option<SkillLevel> {
        self.levels.get(&sport).copied()
    }

    /// Number of rated sports.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Report whether no sports are rated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Iterate over ratings in [`Sport`] declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Sport, SkillLevel)> + '_ {
        self.levels.iter().map(|(&sport, &level)| (sport, level))
    }

    /// The strongest rating across all sports.
    ///
    /// Used as a member's representative level when profiles are compared.
    #[must_use]
    pub fn highest(&self) -> Option<SkillLevel> {
        self.levels.values().copied().max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(value: u8) -> SkillLevel {
        SkillLevel::new(value).expect("valid level")
    }

    #[test]
    fn empty_ratings_have_no_highest() {
        assert_eq!(SportSkills::new().highest(), None);
    }

    #[test]
    fn highest_picks_strongest_sport() {
        let mut skills = SportSkills::new();
        skills.set(Sport::Tennis, level(4));
        skills.set(Sport::Combat, level(9));
        skills.set(Sport::Gym, level(7));
        assert_eq!(skills.highest(), Some(level(9)));
    }

    #[test]
    fn setting_a_sport_twice_overwrites() {
        let mut skills = SportSkills::new();
        skills.set(Sport::Padel, level(3));
        skills.set(Sport::Padel, level(6));
        assert_eq!(skills.get(Sport::Padel), Some(level(6)));
        assert_eq!(skills.len(), 1);
    }

    #[test]
    fn iteration_follows_declaration_order() {
        let mut skills = SportSkills::new();
        skills.set(Sport::Running, level(5));
        skills.set(Sport::Padel, level(8));

        let sports: Vec<Sport> = skills.iter().map(|(sport, _)| sport).collect();
        assert_eq!(sports, vec![Sport::Padel, Sport::Running]);
    }
}
