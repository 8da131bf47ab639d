//! Leaderboard standings ranked by lifetime points.
//!
//! Standings are computed from unranked rows loaded out of the points
//! store. Ranking is a stable descending sort, so rows with equal points
//! keep their input order; restricting to a city re-ranks the survivors
//! from one.

use crate::{City, ProfileId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An unranked leaderboard row as loaded from the points store.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StandingsRow {
    /// Member the row belongs to.
    pub user: ProfileId,
    /// Display name.
    pub name: String,
    /// Home city, when declared.
    #[cfg_attr(feature = "serde", serde(default))]
    pub city: Option<City>,
    /// Lifetime points.
    pub points: u32,
    /// Current attendance streak.
    pub streak: u32,
    /// Sessions attended.
    pub sessions_attended: u32,
    /// Sessions hosted.
    pub sessions_hosted: u32,
}

/// A row with its standings position.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct StandingsEntry {
    /// One-based position, best first.
    pub rank: usize,
    /// The underlying row.
    pub row: StandingsRow,
}

/// Complete standings in descending points order.
///
/// # Examples
/// ```
/// use chainplay_core::{Standings, StandingsRow};
///
/// let rows = vec![
///     StandingsRow {
///         user: "u-1".into(),
///         name: "Marcus W.".into(),
///         city: None,
///         points: 120,
///         streak: 2,
///         sessions_attended: 6,
///         sessions_hosted: 0,
///     },
///     StandingsRow {
///         user: "u-2".into(),
///         name: "Elena K.".into(),
///         city: None,
///         points: 340,
///         streak: 5,
///         sessions_attended: 14,
///         sessions_hosted: 3,
///     },
/// ];
///
/// let standings = Standings::from_rows(rows);
/// assert_eq!(standings.entries()[0].row.name, "Elena K.");
/// assert_eq!(standings.entries()[0].rank, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Standings {
    entries: Vec<StandingsEntry>,
}

impl Standings {
    /// Rank rows by descending points.
    ///
    /// The sort is stable, so rows with equal points keep their input
    /// order and an empty input yields empty standings.
    #[must_use]
    pub fn from_rows(mut rows: Vec<StandingsRow>) -> Self {
        rows.sort_by(|a, b| b.points.cmp(&a.points));
        let entries = rows
            .into_iter()
            .enumerate()
            .map(|(position, row)| StandingsEntry {
                rank: position + 1,
                row,
            })
            .collect();
        Self { entries }
    }

    /// Ranked entries, best first.
    #[must_use]
    pub fn entries(&self) -> &[StandingsEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether the standings are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Standings restricted to members based in `city`, re-ranked from one.
    ///
    /// City comparison is case-insensitive; members without a declared
    /// city are excluded.
    #[must_use]
    pub fn restricted_to_city(&self, city: &City) -> Self {
        let rows = self
            .entries
            .iter()
            .filter(|entry| {
                entry
                    .row
                    .city
                    .as_ref()
                    .is_some_and(|home| home.matches(city))
            })
            .map(|entry| entry.row.clone())
            .collect();
        Self::from_rows(rows)
    }

    /// The position a member with `points` holds: one more than the number
    /// of entries with strictly more points, so ties share the better rank.
    #[must_use]
    pub fn rank_for_points(&self, points: u32) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.row.points > points)
            .count()
            + 1
    }
}
